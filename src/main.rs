//! # tb — daily to-do list CLI
//!
//! A file-backed task list manager. Tasks live in a single JSON file, newest
//! first; the CLI adds, edits, toggles, deletes and filters them, and moves
//! whole lists in and out as portable JSON.
//!
//! ## Quick start
//!
//! ```bash
//! # Add a task
//! tb add "Buy milk"
//!
//! # See what's open
//! tb list --filter active
//!
//! # Done with it
//! tb toggle "Buy milk"
//! tb clear-completed
//!
//! # Move a list between machines
//! tb export --output tasks.json
//! tb import tasks.json
//! ```
//!
//! Data is stored in `~/.taskbook/tasks-v1.json` unless `--db` points
//! elsewhere. Corrupt or missing data starts the list empty rather than
//! failing.

use std::path::PathBuf;

use clap::Parser;

use taskbook::cli::Cli;
use taskbook::cmd::{self, Commands};
use taskbook::storage::JsonFileStorage;
use taskbook::store::TaskStore;

fn main() {
    // Diagnostics go to stderr via RUST_LOG; user output stays on stdout.
    // The handle must outlive main so buffered records get flushed.
    let _logger = match flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            None
        }
    };

    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        cmd::cmd_completions(*shell);
        return;
    }

    let storage = match cli.db {
        Some(path) => JsonFileStorage::new(path),
        None => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            let data_dir = PathBuf::from(home).join(".taskbook");
            if let Err(e) = std::fs::create_dir_all(&data_dir) {
                eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
                std::process::exit(1);
            }
            JsonFileStorage::in_dir(&data_dir)
        }
    };

    let mut store = TaskStore::load(storage);

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),
        Commands::Add { text } => cmd::cmd_add(&mut store, text),
        Commands::List { filter } => cmd::cmd_list(&store, filter),
        Commands::Edit { id, text } => cmd::cmd_edit(&mut store, id, text),
        Commands::Toggle { id } => cmd::cmd_toggle(&mut store, id),
        Commands::Delete { id } => cmd::cmd_delete(&mut store, id),
        Commands::ClearCompleted => cmd::cmd_clear_completed(&mut store),
        Commands::Export { output } => cmd::cmd_export(&store, output),
        Commands::Import { input } => cmd::cmd_import(&mut store, input),
    }
}
