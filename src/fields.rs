//! Field types shared between the core engine and the CLI surface.

use clap::ValueEnum;

/// Which slice of the collection is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    /// Every task, canonical order.
    #[default]
    All,
    /// Incomplete tasks only.
    Active,
    /// Completed tasks only.
    Completed,
}
