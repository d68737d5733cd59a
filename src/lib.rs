//! # taskbook — file-backed to-do list engine
//!
//! A small task list manager: an ordered, newest-first collection of tasks,
//! persisted to a local JSON file, filtered for display, and importable/
//! exportable as portable JSON.
//!
//! The engine is usable without the `tb` binary: construct a
//! [`store::TaskStore`] over any [`storage::Storage`] implementation and
//! drive it with intents. The CLI in `cmd`/`cli` is one presentation layer
//! over that engine; tests use the in-memory adapter the same way.
//!
//! ```no_run
//! use taskbook::fields::Filter;
//! use taskbook::filter::project;
//! use taskbook::storage::MemoryStorage;
//! use taskbook::store::TaskStore;
//!
//! let mut store = TaskStore::load(MemoryStorage::new());
//! store.add("Buy milk")?;
//! let view = project(store.snapshot(), Filter::Active);
//! assert_eq!(view.remaining, 1);
//! # Ok::<(), taskbook::error::Error>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod edit;
pub mod error;
pub mod export;
pub mod fields;
pub mod filter;
pub mod merge;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};
pub use fields::Filter;
pub use task::Task;
