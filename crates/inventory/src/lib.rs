//! Item storage domain.
//!
//! Items, the text-record factory, stacks and the fixed-size inventory,
//! implemented purely as deterministic domain logic (no I/O, no logging).

pub mod factory;
pub mod inventory;
pub mod item;
pub mod stack;

pub use factory::{ItemFactory, ParseError};
pub use inventory::Inventory;
pub use item::{Armour, Consumable, Item, ItemKind, Material, StackKey, Tool};
pub use stack::ItemStack;
