use crate::state::store::{Readable, Subscription, Writable};

/// Top-level page section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    About,
    Projects,
    Shop,
}

/// In-memory current section. Clones share state.
#[derive(Clone, Debug)]
pub struct NavigationStore {
    current: Writable<Section>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStore {
    /// Start at [`Section::About`].
    pub fn new() -> Self {
        Self {
            current: Writable::new(Section::default()),
        }
    }

    pub fn navigate_to(&self, section: Section) {
        tracing::debug!(?section, "navigate");
        self.current.set(section);
    }

    pub fn current(&self) -> Section {
        self.current.get()
    }
}

impl Readable<Section> for NavigationStore {
    fn get(&self) -> Section {
        self.current.get()
    }

    fn subscribe(&self, listener: Box<dyn Fn(&Section)>) -> Subscription {
        self.current.subscribe(listener)
    }
}
