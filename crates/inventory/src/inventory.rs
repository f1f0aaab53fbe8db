use core::fmt;

use serde::Serialize;

use stash_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::stack::ItemStack;

/// Fixed number of slots, each empty or holding one [`ItemStack`].
///
/// The slot vector is sized once at construction and never grows. Insertion
/// merges into an existing stack before it opens a new slot, and scans in slot
/// order, so the same item sequence always yields the same layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// Slot count used when the caller has no valid size.
    pub const DEFAULT_SIZE: usize = 10;

    /// Fails when `size` is 0 or the slots cannot be allocated.
    pub fn new(size: usize) -> DomainResult<Self> {
        if size < 1 {
            return Err(DomainError::validation("inventory size must be at least 1"));
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(size).map_err(|err| {
            DomainError::validation(format!("cannot allocate {size} inventory slots: {err}"))
        })?;
        slots.resize(size, None);
        Ok(Self { slots })
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Every slot holds a stack (some may still accept merges).
    pub fn is_full(&self) -> bool {
        self.occupied_slots() == self.size()
    }

    /// Occupied share of all slots, floored to a whole percent.
    pub fn utilization_percent(&self) -> usize {
        self.occupied_slots() * 100 / self.size()
    }

    /// Slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&ItemStack>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Store one unit of `item`.
    ///
    /// 1. merge into the first same-key stack with room, else
    /// 2. start a stack in the first empty slot, else
    /// 3. reject: return `false` and leave every slot as it was.
    pub fn add_item(&mut self, item: Item) -> bool {
        let key = item.stacking_key();
        let mergeable = self
            .slots
            .iter_mut()
            .flatten()
            .find(|stack| stack.stacking_key() == key && !stack.is_full());

        if let Some(stack) = mergeable {
            let merged = stack.try_merge(&item);
            debug_assert!(merged, "scan only selects stacks with room");
            return merged;
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(ItemStack::new(item));
                true
            }
            None => false,
        }
    }

    /// Summary listing item attributes for each occupied slot.
    ///
    /// Empty slots are left out; the header still reports utilization.
    pub fn render_detailed(&self) -> String {
        let mut out = self.header();
        for stack in self.slots.iter().flatten() {
            out.push_str(&stack.item().to_string());
            out.push_str(&format!("  Qty: {}\n\n", stack.quantity()));
        }
        out
    }

    fn header(&self) -> String {
        format!(
            " -Used {}% of {} slots\n",
            self.utilization_percent(),
            self.size()
        )
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: vec![None; Self::DEFAULT_SIZE],
        }
    }
}

/// One line per slot, `[index] name xQuantity` or `[index] <empty>`.
impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(stack) => writeln!(
                    f,
                    "  [{index}] {} x{}",
                    stack.item().name(),
                    stack.quantity()
                )?,
                None => writeln!(f, "  [{index}] <empty>")?,
            }
        }
        Ok(())
    }
}
