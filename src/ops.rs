pub(crate) mod crop;
pub(crate) mod overlay;
pub(crate) mod paste;
pub(crate) mod placement;
