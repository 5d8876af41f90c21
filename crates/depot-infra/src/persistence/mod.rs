//! Persistence implementations
//!
//! SQLite-backed implementation of the summary repository trait.

mod schema;
mod sqlite_summary_repo;

pub use sqlite_summary_repo::{SqliteLocation, SqliteOptions, SqliteSummaryRepository};
