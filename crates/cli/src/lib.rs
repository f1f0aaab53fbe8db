//! `stash` driver: reads item records from a file, stores them in a
//! fixed-size inventory and prints the processing log and summary.

pub mod config;
pub mod driver;
pub mod error;
pub mod source;

use std::io::Write;

pub use config::{ReportStyle, RunConfig};
pub use error::{CliError, USAGE};

/// Execute one run, writing all report output to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<(), CliError> {
    let items = source::read_items(&config.items_path)?;
    tracing::info!(
        path = %config.items_path.display(),
        items = items.len(),
        size = config.inventory_size,
        "read item records"
    );

    let inventory =
        driver::create_inventory(items, config.inventory_size, out).map_err(CliError::Output)?;
    driver::write_report(&inventory, config.report, out).map_err(CliError::Output)
}
