pub(crate) mod navigation;
pub(crate) mod store;
pub(crate) mod theme;
