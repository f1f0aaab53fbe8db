use serde::Serialize;

use stash_core::{DomainError, DomainResult, ValueObject};

/// Closed set of item categories; the tag half of the stacking key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Tool,
    Armour,
    Consumable,
    Material,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Tool,
        ItemKind::Armour,
        ItemKind::Consumable,
        ItemKind::Material,
    ];

    /// Canonical discriminator token for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Tool => "Tool",
            ItemKind::Armour => "Armour",
            ItemKind::Consumable => "Consumable",
            ItemKind::Material => "Material",
        }
    }

    /// Resolve a discriminator token. Matching ignores ASCII case and accepts
    /// `Armor` as an alias of `Armour`.
    pub fn from_tag(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("armor") {
            return Some(ItemKind::Armour);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(token))
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identity under which two item instances are interchangeable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackKey<'a> {
    pub kind: ItemKind,
    pub name: &'a str,
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("item name cannot be empty"));
    }
    Ok(())
}

fn validate_max_stack(max_stack_size: u32) -> DomainResult<()> {
    if max_stack_size < 1 {
        return Err(DomainError::validation("max stack size must be at least 1"));
    }
    Ok(())
}

/// Tool: never stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    name: String,
    material: String,
    durability: u32,
    speed: u32,
    modifier: String,
    modifier_level: u32,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        durability: u32,
        speed: u32,
        modifier: impl Into<String>,
        modifier_level: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            material: material.into(),
            durability,
            speed,
            modifier: modifier.into(),
            modifier_level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    pub fn modifier_level(&self) -> u32 {
        self.modifier_level
    }
}

/// Armour: never stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Armour {
    name: String,
    material: String,
    durability: u32,
    defense: u32,
    modifier: String,
    modifier_level: u32,
    element: String,
}

impl Armour {
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        durability: u32,
        defense: u32,
        modifier: impl Into<String>,
        modifier_level: u32,
        element: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            material: material.into(),
            durability,
            defense,
            modifier: modifier.into(),
            modifier_level,
            element: element.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    pub fn modifier_level(&self) -> u32 {
        self.modifier_level
    }

    pub fn element(&self) -> &str {
        &self.element
    }
}

/// Consumable: stacks up to `max_stack_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consumable {
    name: String,
    effect: String,
    uses: u32,
    max_stack_size: u32,
}

impl Consumable {
    pub const DEFAULT_MAX_STACK: u32 = 5;

    pub fn new(
        name: impl Into<String>,
        effect: impl Into<String>,
        uses: u32,
        max_stack_size: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_max_stack(max_stack_size)?;
        Ok(Self {
            name,
            effect: effect.into(),
            uses,
            max_stack_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect(&self) -> &str {
        &self.effect
    }

    pub fn uses(&self) -> u32 {
        self.uses
    }

    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }
}

/// Crafting material: only a name and a stack limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    name: String,
    max_stack_size: u32,
}

impl Material {
    pub const DEFAULT_MAX_STACK: u32 = 64;

    pub fn new(name: impl Into<String>, max_stack_size: u32) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_max_stack(max_stack_size)?;
        Ok(Self {
            name,
            max_stack_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }
}

/// One item record. Immutable once built; every constructor validates
/// `name` (non-empty) and `max_stack_size` (at least 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Tool(Tool),
    Armour(Armour),
    Consumable(Consumable),
    Material(Material),
}

impl ValueObject for Item {}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Tool(_) => ItemKind::Tool,
            Item::Armour(_) => ItemKind::Armour,
            Item::Consumable(_) => ItemKind::Consumable,
            Item::Material(_) => ItemKind::Material,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Tool(t) => t.name(),
            Item::Armour(a) => a.name(),
            Item::Consumable(c) => c.name(),
            Item::Material(m) => m.name(),
        }
    }

    pub fn max_stack_size(&self) -> u32 {
        match self {
            Item::Tool(_) | Item::Armour(_) => 1,
            Item::Consumable(c) => c.max_stack_size(),
            Item::Material(m) => m.max_stack_size(),
        }
    }

    pub fn stacking_key(&self) -> StackKey<'_> {
        StackKey {
            kind: self.kind(),
            name: self.name(),
        }
    }
}

impl From<Tool> for Item {
    fn from(value: Tool) -> Self {
        Item::Tool(value)
    }
}

impl From<Armour> for Item {
    fn from(value: Armour) -> Self {
        Item::Armour(value)
    }
}

impl From<Consumable> for Item {
    fn from(value: Consumable) -> Self {
        Item::Consumable(value)
    }
}

impl From<Material> for Item {
    fn from(value: Material) -> Self {
        Item::Material(value)
    }
}

/// Multi-line attribute block, two-space indented, one attribute per line.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "  Name: {}", self.name())?;
        writeln!(f, "  Kind: {}", self.kind())?;
        match self {
            Item::Tool(t) => {
                writeln!(f, "  Material: {}", t.material())?;
                writeln!(f, "  Durability: {}", t.durability())?;
                writeln!(f, "  Speed: {}", t.speed())?;
                writeln!(f, "  Modifier: {} (level {})", t.modifier(), t.modifier_level())
            }
            Item::Armour(a) => {
                writeln!(f, "  Material: {}", a.material())?;
                writeln!(f, "  Durability: {}", a.durability())?;
                writeln!(f, "  Defense: {}", a.defense())?;
                writeln!(f, "  Modifier: {} (level {})", a.modifier(), a.modifier_level())?;
                writeln!(f, "  Element: {}", a.element())
            }
            Item::Consumable(c) => {
                writeln!(f, "  Effect: {}", c.effect())?;
                writeln!(f, "  Uses: {}", c.uses())?;
                writeln!(f, "  Max stack: {}", c.max_stack_size())
            }
            Item::Material(m) => writeln!(f, "  Max stack: {}", m.max_stack_size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickaxe() -> Item {
        Tool::new("Pickaxe", "Diamond", 100, 1, "Fortune", 5)
            .unwrap()
            .into()
    }

    fn potion(max: u32) -> Item {
        Consumable::new("Potion", "Healing", 1, max).unwrap().into()
    }

    #[test]
    fn kind_tags_resolve_case_insensitively() {
        assert_eq!(ItemKind::from_tag("tool"), Some(ItemKind::Tool));
        assert_eq!(ItemKind::from_tag("ARMOUR"), Some(ItemKind::Armour));
        assert_eq!(ItemKind::from_tag("Armor"), Some(ItemKind::Armour));
        assert_eq!(ItemKind::from_tag("Consumable"), Some(ItemKind::Consumable));
        assert_eq!(ItemKind::from_tag("material"), Some(ItemKind::Material));
        assert_eq!(ItemKind::from_tag("Weapon"), None);
        assert_eq!(ItemKind::from_tag(""), None);
    }

    #[test]
    fn tools_and_armour_never_stack() {
        let boots: Item = Armour::new("Boots", "Leather", 50, 2, "Feather", 1, "Air")
            .unwrap()
            .into();
        assert_eq!(pickaxe().max_stack_size(), 1);
        assert_eq!(boots.max_stack_size(), 1);
        assert_eq!(potion(5).max_stack_size(), 5);
    }

    #[test]
    fn constructors_reject_empty_name() {
        let err = Material::new("   ", 10).unwrap_err();
        assert_eq!(err, DomainError::validation("item name cannot be empty"));
        assert!(Tool::new("", "Iron", 1, 1, "None", 0).is_err());
    }

    #[test]
    fn constructors_reject_zero_max_stack() {
        assert!(Consumable::new("Potion", "Healing", 1, 0).is_err());
        assert!(Material::new("Stone", 0).is_err());
    }

    #[test]
    fn stacking_key_is_kind_plus_name() {
        let potion_material: Item = Material::new("Potion", 10).unwrap().into();

        assert_eq!(potion(5).stacking_key(), potion(3).stacking_key());
        assert_ne!(potion(5).stacking_key(), potion_material.stacking_key());
        assert_eq!(
            pickaxe().stacking_key(),
            StackKey {
                kind: ItemKind::Tool,
                name: "Pickaxe"
            }
        );
    }

    #[test]
    fn display_lists_variant_attributes() {
        let rendered = pickaxe().to_string();
        assert_eq!(
            rendered,
            "  Name: Pickaxe\n  Kind: Tool\n  Material: Diamond\n  Durability: 100\n\
             \x20 Speed: 1\n  Modifier: Fortune (level 5)\n"
        );
    }
}
