use vodca::{AsRefln, Fromln};

/// Whether the book is still part of the current inventory.
/// Removal only ever flips this to `false`; rows are never deleted.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct InInventory(bool);

impl InInventory {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

impl Default for InInventory {
    fn default() -> Self {
        Self::new(true)
    }
}
