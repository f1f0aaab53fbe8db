//! Reading item records from disk.

use std::fs;
use std::path::Path;

use stash_inventory::{Item, ItemFactory, ParseError};

use crate::error::CliError;

/// Read `path` fully and parse every line, dropping records that do not parse.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
pub fn read_items(path: &Path) -> Result<Vec<Item>, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_items(&String::from_utf8_lossy(&bytes)))
}

/// Parse one record per line. Unparseable lines are skipped; blank lines
/// silently, anything else with a `debug` event naming the line and reason.
pub fn parse_items(text: &str) -> Vec<Item> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| match ItemFactory::parse_line(line) {
            Ok(item) => Some(item),
            Err(ParseError::Blank) => None,
            Err(reason) => {
                tracing::debug!(line = index + 1, %reason, "skipping item record");
                None
            }
        })
        .collect()
}
