//! Text record → [`Item`] parsing.
//!
//! One record per line, whitespace-separated, discriminator first:
//!
//! ```text
//! Tool       <name> <material> <durability> <speed> <modifier> <modifier_level>
//! Armour     <name> <material> <durability> <defense> <modifier> <modifier_level> <element>
//! Consumable <name> <effect> <uses> [max_stack_size]
//! Material   <name> [max_stack_size]
//! ```
//!
//! Numeric fields are unsigned integers. An omitted `max_stack_size` falls back
//! to the variant default.

use core::str::SplitWhitespace;

use thiserror::Error;

use stash_core::DomainError;

use crate::item::{Armour, Consumable, Item, ItemKind, Material, Tool};

/// Why a record could not be turned into an item.
///
/// Callers skip the record and keep going; none of these abort a read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("blank record")]
    Blank,

    #[error("unknown item kind `{0}`")]
    UnknownKind(String),

    #[error("{kind} record is missing `{field}`")]
    MissingField { kind: ItemKind, field: &'static str },

    #[error("`{field}` must be a non-negative integer, got `{value}`")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{kind} record has unexpected trailing token `{token}`")]
    TrailingToken { kind: ItemKind, token: String },

    /// Tokens parsed but the values break an item constraint.
    #[error(transparent)]
    Rejected(#[from] DomainError),
}

/// Builds items from text records, dispatching on the discriminator token.
#[derive(Debug, Default, Copy, Clone)]
pub struct ItemFactory;

impl ItemFactory {
    /// Parse one record. Pure; the `Err` arm is the "not parseable" outcome.
    pub fn parse_line(line: &str) -> Result<Item, ParseError> {
        let mut tokens = line.split_whitespace();
        let tag = tokens.next().ok_or(ParseError::Blank)?;
        let kind =
            ItemKind::from_tag(tag).ok_or_else(|| ParseError::UnknownKind(tag.to_string()))?;

        let mut fields = Fields { kind, tokens };
        let item = match kind {
            ItemKind::Tool => Tool::new(
                fields.text("name")?,
                fields.text("material")?,
                fields.number("durability")?,
                fields.number("speed")?,
                fields.text("modifier")?,
                fields.number("modifier_level")?,
            )?
            .into(),
            ItemKind::Armour => Armour::new(
                fields.text("name")?,
                fields.text("material")?,
                fields.number("durability")?,
                fields.number("defense")?,
                fields.text("modifier")?,
                fields.number("modifier_level")?,
                fields.text("element")?,
            )?
            .into(),
            ItemKind::Consumable => {
                let name = fields.text("name")?;
                let effect = fields.text("effect")?;
                let uses = fields.number("uses")?;
                let max_stack = fields
                    .optional_number("max_stack_size")?
                    .unwrap_or(Consumable::DEFAULT_MAX_STACK);
                Consumable::new(name, effect, uses, max_stack)?.into()
            }
            ItemKind::Material => {
                let name = fields.text("name")?;
                let max_stack = fields
                    .optional_number("max_stack_size")?
                    .unwrap_or(Material::DEFAULT_MAX_STACK);
                Material::new(name, max_stack)?.into()
            }
        };

        fields.finish()?;
        Ok(item)
    }
}

/// Cursor over the tokens following the discriminator.
struct Fields<'a> {
    kind: ItemKind,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.tokens.next().ok_or(ParseError::MissingField {
            kind: self.kind,
            field,
        })
    }

    fn number(&mut self, field: &'static str) -> Result<u32, ParseError> {
        let raw = self.text(field)?;
        parse_number(field, raw)
    }

    fn optional_number(&mut self, field: &'static str) -> Result<Option<u32>, ParseError> {
        self.tokens
            .next()
            .map(|raw| parse_number(field, raw))
            .transpose()
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingToken {
                kind: self.kind,
                token: token.to_string(),
            }),
        }
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, ParseError> {
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
