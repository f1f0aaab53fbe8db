//! Value object trait: equality by value, not identity.
//!
//! Items are value objects: two `Potion` records with the same attributes are
//! the same item, and nothing about an item changes once it is constructed.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value.
///
/// The trait requires:
/// - **Clone**: values are copied into the structures that own them
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Rarity {
///     tier: u8,
/// }
///
/// impl ValueObject for Rarity {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
