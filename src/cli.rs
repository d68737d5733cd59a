use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed to-do list CLI.
/// Storage defaults to ~/.taskbook/tasks-v1.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tb", version, about = "Daily to-do list CLI")]
pub struct Cli {
    /// Path to the JSON storage file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
