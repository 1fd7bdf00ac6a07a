//! Light/dark theme preference.
//!
//! The initial theme comes from persisted storage, then the OS color-scheme preference, then
//! falls back to [`Theme::Dark`]. Changing the theme persists it before publishing.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
    rc::Rc,
    str::FromStr,
};

use anyhow::Context as _;

use crate::{
    foundation::error::{SheenError, SheenResult},
    state::store::{Readable, Subscription, Writable},
};

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Environment variable read by [`EnvProbe`].
pub const COLOR_SCHEME_ENV: &str = "SHEEN_COLOR_SCHEME";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = SheenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SheenError::invalid_argument(format!(
                "unknown theme '{other}'"
            ))),
        }
    }
}

/// String key/value persistence, shaped like browser local storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> SheenResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> SheenResult<()>;
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> SheenResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> SheenResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a flat JSON object on disk. A missing file reads as empty.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// String entries of the stored object; other values are skipped.
    fn read_all(&self) -> SheenResult<BTreeMap<String, String>> {
        let s = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(SheenError::storage(format!(
                    "read '{}': {e}",
                    self.path.display()
                )));
            }
        };
        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(&s).map_err(|e| SheenError::serde(e.to_string()))?;
        Ok(raw
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> SheenResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> SheenResult<()> {
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(SheenError::Serde(e)) => {
                tracing::debug!(%e, path = %self.path.display(), "replacing unreadable storage");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());
        let json =
            serde_json::to_string_pretty(&items).map_err(|e| SheenError::serde(e.to_string()))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create storage dir '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("write storage '{}'", self.path.display()))?;
        Ok(())
    }
}

/// Answers "does the OS prefer a light color scheme?".
pub trait ColorSchemeProbe {
    fn prefers_light(&self) -> bool;
}

/// A probe with a fixed answer.
#[derive(Clone, Copy, Debug)]
pub struct StaticProbe(pub Theme);

impl ColorSchemeProbe for StaticProbe {
    fn prefers_light(&self) -> bool {
        self.0 == Theme::Light
    }
}

/// Reads [`COLOR_SCHEME_ENV`]; anything but `light` means no light preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvProbe;

impl ColorSchemeProbe for EnvProbe {
    fn prefers_light(&self) -> bool {
        std::env::var(COLOR_SCHEME_ENV).is_ok_and(|v| v.trim().eq_ignore_ascii_case("light"))
    }
}

/// Where the theme store reads and persists its preference.
pub struct ThemeEnv {
    storage: Box<dyn KeyValueStorage>,
    probe: Box<dyn ColorSchemeProbe>,
}

impl ThemeEnv {
    pub fn new(
        storage: impl KeyValueStorage + 'static,
        probe: impl ColorSchemeProbe + 'static,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            probe: Box::new(probe),
        }
    }

    fn initial_theme(&self) -> Theme {
        match self.storage.get_item(THEME_KEY) {
            Ok(Some(stored)) => match stored.parse::<Theme>() {
                Ok(theme) => return theme,
                Err(e) => tracing::debug!(%e, "ignoring stored theme"),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(%e, "failed to read stored theme"),
        }
        if self.probe.prefers_light() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn persist(&mut self, theme: Theme) {
        if let Err(e) = self.storage.set_item(THEME_KEY, theme.as_str()) {
            tracing::warn!(%e, theme = theme.as_str(), "failed to persist theme");
        }
    }
}

impl std::fmt::Debug for ThemeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEnv").finish_non_exhaustive()
    }
}

/// Observable theme with persistence on change.
#[derive(Debug)]
pub struct ThemeStore {
    theme: Writable<Theme>,
    env: Option<ThemeEnv>,
}

impl ThemeStore {
    /// Resolve the initial theme from `env`.
    #[tracing::instrument(skip(env))]
    pub fn new(env: ThemeEnv) -> Self {
        let initial = env.initial_theme();
        tracing::debug!(theme = initial.as_str(), "initial theme");
        Self {
            theme: Writable::new(initial),
            env: Some(env),
        }
    }

    /// A store with no storage and no OS preference: starts dark, persists nothing.
    pub fn headless() -> Self {
        Self {
            theme: Writable::new(Theme::Dark),
            env: None,
        }
    }

    pub fn toggle(&mut self) {
        let next = self.theme.get().toggled();
        self.set(next);
    }

    pub fn set(&mut self, theme: Theme) {
        if let Some(env) = self.env.as_mut() {
            env.persist(theme);
        }
        self.theme.set(theme);
    }
}

impl Readable<Theme> for ThemeStore {
    fn get(&self) -> Theme {
        self.theme.get()
    }

    fn subscribe(&self, listener: Box<dyn Fn(&Theme)>) -> Subscription {
        self.theme.subscribe(listener)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/theme.rs"]
mod tests;
