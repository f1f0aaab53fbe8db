use serde::Serialize;

use crate::item::{Item, StackKey};

/// Units of one item kind occupying a single slot.
///
/// Invariant: `1 <= quantity <= item.max_stack_size()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    item: Item,
    quantity: u32,
}

impl ItemStack {
    /// A fresh stack holding one unit of `item`.
    pub fn new(item: Item) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn stacking_key(&self) -> StackKey<'_> {
        self.item.stacking_key()
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.item.max_stack_size() - self.quantity
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    /// Add one unit of `other` if it shares this stack's key and there is room.
    ///
    /// Returns `false` and leaves the stack untouched otherwise.
    pub fn try_merge(&mut self, other: &Item) -> bool {
        if other.stacking_key() != self.stacking_key() || self.is_full() {
            return false;
        }
        self.quantity += 1;
        true
    }
}
