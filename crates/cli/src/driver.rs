//! Filling the inventory and writing the processing log and summary.

use std::io::{self, Write};

use stash_inventory::{Inventory, Item};

use crate::config::ReportStyle;

/// Insert `items` in order into a fresh inventory of `size` slots, writing one
/// processing-log line per item: ` (S) name` when stored, ` (D) name` when
/// discarded.
pub fn create_inventory<W, I>(items: I, size: usize, log: &mut W) -> io::Result<Inventory>
where
    W: Write,
    I: IntoIterator<Item = Item>,
{
    let mut inventory = Inventory::new(size).unwrap_or_else(|err| {
        tracing::warn!(%err, default = Inventory::DEFAULT_SIZE, "using default inventory size");
        Inventory::default()
    });

    let mut stored = 0usize;
    let mut discarded = 0usize;

    writeln!(log, "Processing Log:")?;
    for item in items {
        let name = item.name().to_string();
        if inventory.add_item(item) {
            stored += 1;
            tracing::debug!(item = %name, "stored");
            writeln!(log, " (S) {name}")?;
        } else {
            discarded += 1;
            tracing::debug!(item = %name, "discarded");
            writeln!(log, " (D) {name}")?;
        }
    }
    writeln!(log)?;

    tracing::info!(
        stored,
        discarded,
        occupied = inventory.occupied_slots(),
        size = inventory.size(),
        "inventory filled"
    );

    Ok(inventory)
}

/// Write the `Player Storage Summary:` block.
pub fn write_report<W: Write>(
    inventory: &Inventory,
    style: ReportStyle,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Player Storage Summary:")?;
    match style {
        ReportStyle::Slots => write!(out, "{inventory}")?,
        ReportStyle::Detailed => write!(out, "{}", inventory.render_detailed())?,
    }
    out.flush()
}
