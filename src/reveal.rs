pub(crate) mod ease;
pub(crate) mod page;
pub(crate) mod split;
pub(crate) mod tween;
