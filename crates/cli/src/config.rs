//! Run configuration assembled from command-line arguments.

use std::path::PathBuf;

use stash_inventory::Inventory;

use crate::error::CliError;

/// Which summary rendering to print.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// One line per slot, empty slots included.
    #[default]
    Slots,
    /// Attribute block per occupied slot.
    Detailed,
}

/// Everything one `stash` run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// File holding one item record per line.
    pub items_path: PathBuf,
    /// Slot count, always at least 1.
    pub inventory_size: usize,
    pub report: ReportStyle,
}

impl RunConfig {
    pub fn new(items_path: impl Into<PathBuf>) -> Self {
        Self {
            items_path: items_path.into(),
            inventory_size: Inventory::DEFAULT_SIZE,
            report: ReportStyle::default(),
        }
    }

    /// Sizes below 1 are replaced by [`Inventory::DEFAULT_SIZE`].
    pub fn with_inventory_size(mut self, size: usize) -> Self {
        self.inventory_size = if size < 1 { Inventory::DEFAULT_SIZE } else { size };
        self
    }

    pub fn with_report(mut self, report: ReportStyle) -> Self {
        self.report = report;
        self
    }

    /// Build from the arguments after the program name:
    /// `items-file [inventory-size] [--detailed]`.
    pub fn from_args<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positional = Vec::new();
        let mut report = ReportStyle::default();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--detailed" => report = ReportStyle::Detailed,
                flag if flag.starts_with("--") => {
                    return Err(CliError::UnknownOption(flag.to_string()));
                }
                value => positional.push(value.to_string()),
            }
        }

        let mut positional = positional.into_iter();
        let items_path = positional.next().ok_or(CliError::Usage)?;
        let size = inventory_size(positional.next().as_deref());

        let extra: Vec<String> = positional.collect();
        if !extra.is_empty() {
            tracing::warn!(?extra, "ignoring extra arguments");
        }

        Ok(Self::new(items_path)
            .with_inventory_size(size)
            .with_report(report))
    }
}

/// Interpret the optional size argument, falling back to
/// [`Inventory::DEFAULT_SIZE`] when it is absent, non-numeric, below 1 or
/// beyond `i32` range.
pub fn inventory_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return Inventory::DEFAULT_SIZE;
    };

    match raw.trim().parse::<i32>() {
        Ok(size) if size >= 1 => usize::try_from(size).unwrap_or(Inventory::DEFAULT_SIZE),
        _ => {
            tracing::warn!(
                value = raw,
                default = Inventory::DEFAULT_SIZE,
                "invalid inventory size; using default"
            );
            Inventory::DEFAULT_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_only_uses_default_size() {
        let config = RunConfig::from_args(["items.txt"]).unwrap();
        assert_eq!(config.items_path, PathBuf::from("items.txt"));
        assert_eq!(config.inventory_size, Inventory::DEFAULT_SIZE);
        assert_eq!(config.report, ReportStyle::Slots);
    }

    #[test]
    fn explicit_size_and_detailed_flag() {
        let config = RunConfig::from_args(["--detailed", "items.txt", "4"]).unwrap();
        assert_eq!(config.inventory_size, 4);
        assert_eq!(config.report, ReportStyle::Detailed);
    }

    #[test]
    fn missing_filename_is_usage_error() {
        let err = RunConfig::from_args(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CliError::Usage));

        let err = RunConfig::from_args(["--detailed"]).unwrap_err();
        assert!(matches!(err, CliError::Usage));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = RunConfig::from_args(["items.txt", "--verbose"]).unwrap_err();
        match err {
            CliError::UnknownOption(flag) => assert_eq!(flag, "--verbose"),
            other => panic!("Expected UnknownOption, got {other:?}"),
        }
    }

    #[test]
    fn invalid_sizes_fall_back_to_default() {
        assert_eq!(inventory_size(None), Inventory::DEFAULT_SIZE);
        assert_eq!(inventory_size(Some("ten")), Inventory::DEFAULT_SIZE);
        assert_eq!(inventory_size(Some("0")), Inventory::DEFAULT_SIZE);
        assert_eq!(inventory_size(Some("-4")), Inventory::DEFAULT_SIZE);
        assert_eq!(inventory_size(Some("2.5")), Inventory::DEFAULT_SIZE);
        assert_eq!(inventory_size(Some("3000000000")), Inventory::DEFAULT_SIZE);
        assert_eq!(inventory_size(Some("2147483647")), 2_147_483_647);
        assert_eq!(inventory_size(Some("7")), 7);
    }

    #[test]
    fn builder_clamps_zero_size() {
        let config = RunConfig::new("items.txt").with_inventory_size(0);
        assert_eq!(config.inventory_size, Inventory::DEFAULT_SIZE);
    }
}
