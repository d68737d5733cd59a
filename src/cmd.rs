//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers that translate CLI invocations
//! into store intents and print the results. All task semantics live in the
//! store; nothing here mutates the collection directly.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use chrono::Local;

use crate::error::Error;
use crate::export::{export_filename, serialize_tasks};
use crate::fields::Filter;
use crate::filter::project;
use crate::storage::Storage;
use crate::store::TaskStore;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// What needs doing.
        text: String,
    },

    /// List tasks under a filter.
    List {
        /// Which tasks to show: all | active | completed.
        #[arg(long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Replace a task's text.
    Edit {
        /// Task ID (a unique prefix works) or exact text.
        id: String,
        /// The new text.
        text: String,
    },

    /// Toggle a task between active and completed.
    Toggle {
        /// Task ID (a unique prefix works) or exact text.
        id: String,
    },

    /// Delete a task.
    Delete {
        /// Task ID (a unique prefix works) or exact text.
        id: String,
    },

    /// Delete every completed task.
    ClearCompleted,

    /// Write all tasks to a JSON file.
    Export {
        /// Output path. Defaults to a timestamped name in the current directory.
        #[arg(long)]
        output: Option<String>,
    },

    /// Merge tasks from a JSON file into the list.
    Import {
        /// Path to a JSON array of tasks.
        input: String,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a new task to the store.
pub fn cmd_add<S: Storage>(store: &mut TaskStore<S>, text: String) {
    match store.add(&text) {
        Ok(Some(task)) => println!("Added {} ({})", task.text, short_id(&task.id)),
        Ok(None) => println!("Nothing to add: text is empty."),
        Err(e) => warn_write(&e),
    }
}

/// List tasks under the given filter, plus the remaining count.
pub fn cmd_list<S: Storage>(store: &TaskStore<S>, filter: Filter) {
    let projection = project(store.snapshot(), filter);
    if projection.visible.is_empty() {
        println!("No tasks to show.");
    } else {
        print_table(&projection.visible);
    }
    println!("{} item(s) left", projection.remaining);
}

/// Replace a task's text. An empty replacement leaves the task unchanged.
pub fn cmd_edit<S: Storage>(store: &mut TaskStore<S>, id: String, text: String) {
    let id = resolve_or_exit(store, &id);
    match store.edit(&id, &text) {
        Ok(true) => println!("Updated {}", short_id(&id)),
        Ok(false) => println!("Edit discarded: empty text leaves the task unchanged."),
        Err(e) => warn_write(&e),
    }
}

/// Flip a task's completion state.
pub fn cmd_toggle<S: Storage>(store: &mut TaskStore<S>, id: String) {
    let id = resolve_or_exit(store, &id);
    match store.toggle_complete(&id) {
        Ok(_) => {
            let state = store
                .get(&id)
                .map(|t| if t.completed { "completed" } else { "active" })
                .unwrap_or("unknown");
            println!("Task {} is now {}", short_id(&id), state);
        }
        Err(e) => warn_write(&e),
    }
}

/// Delete a task by id.
pub fn cmd_delete<S: Storage>(store: &mut TaskStore<S>, id: String) {
    let id = resolve_or_exit(store, &id);
    match store.delete(&id) {
        Ok(true) => println!("Deleted {}", short_id(&id)),
        Ok(false) => println!("No task with id {}", id),
        Err(e) => warn_write(&e),
    }
}

/// Remove every completed task.
pub fn cmd_clear_completed<S: Storage>(store: &mut TaskStore<S>) {
    match store.clear_completed() {
        Ok(removed) => println!("Removed {} completed task(s)", removed),
        Err(e) => warn_write(&e),
    }
}

/// Export the whole collection to a JSON file.
pub fn cmd_export<S: Storage>(store: &TaskStore<S>, output: Option<String>) {
    let path = output.unwrap_or_else(|| export_filename(Local::now()));
    let json = match serialize_tasks(store.snapshot()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Export failed: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = std::fs::write(&path, json) {
        eprintln!("Failed to write {path}: {e}");
        std::process::exit(1);
    }
    println!("Exported {} task(s) to {}", store.len(), path);
}

/// Merge a JSON file of tasks into the collection.
pub fn cmd_import<S: Storage>(store: &mut TaskStore<S>, input: String) {
    let json = match std::fs::read_to_string(&input) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to read {input}: {e}");
            std::process::exit(1);
        }
    };
    match store.import(&json) {
        Ok(summary) => println!(
            "Imported {} task(s), skipped {} record(s)",
            summary.added, summary.dropped
        ),
        Err(e @ Error::ImportFormat(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => warn_write(&e),
    }
}

/// Print shell completion scripts to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Resolve a task identifier (id, unique id prefix, or exact text) to a full
/// task id, or exit with a message.
fn resolve_or_exit<S: Storage>(store: &TaskStore<S>, identifier: &str) -> String {
    match resolve_task(store.snapshot(), identifier) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Resolve an identifier against the collection.
///
/// Exact id wins, then a unique id prefix, then a case-insensitive exact
/// text match. Ambiguous matches are an error listing the candidates.
pub fn resolve_task(tasks: &[Task], identifier: &str) -> Result<String, String> {
    if let Some(task) = tasks.iter().find(|t| t.id == identifier) {
        return Ok(task.id.clone());
    }

    if !identifier.is_empty() {
        let prefixed: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.id.starts_with(identifier))
            .collect();
        match prefixed.len() {
            1 => return Ok(prefixed[0].id.clone()),
            n if n > 1 => {
                return Err(format!(
                    "Id prefix '{}' is ambiguous ({} matches). Use more characters.",
                    identifier, n
                ));
            }
            _ => {}
        }
    }

    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.text.to_lowercase() == identifier.to_lowercase())
        .collect();
    match matches.len() {
        0 => Err(format!("No task found matching '{}'", identifier)),
        1 => Ok(matches[0].id.clone()),
        _ => {
            let mut msg = format!("Multiple tasks match '{}':\n", identifier);
            for task in matches {
                msg.push_str(&format!("  {}: {}\n", short_id(&task.id), task.text));
            }
            msg.push_str("Please use the id instead.");
            Err(msg)
        }
    }
}

/// Print tasks in a formatted table.
fn print_table(tasks: &[&Task]) {
    println!("{:<10} {:<4} {:<12} {}", "ID", "Done", "Created", "Text");
    for t in tasks {
        let done = if t.completed { "[x]" } else { "[ ]" };
        println!(
            "{:<10} {:<4} {:<12} {}",
            short_id(&t.id),
            done,
            date_part(&t.created_at),
            t.text
        );
    }
}

/// First eight characters of an id, enough to address a task uniquely in
/// practice.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// The YYYY-MM-DD part of an ISO timestamp.
fn date_part(timestamp: &str) -> String {
    timestamp.chars().take(10).collect()
}

fn warn_write(e: &Error) {
    eprintln!("Warning: change kept in memory but not saved: {e}");
}
