//! Repository adapters for persistence layer

use std::path::PathBuf;
use std::time::Duration;

use depot_infra::persistence::{SqliteLocation, SqliteOptions, SqliteSummaryRepository};
use depot_types::{Error, Result};

use crate::config::Config;

/// Connection options taken from config
pub fn sqlite_options(config: &Config) -> SqliteOptions {
    SqliteOptions {
        busy_timeout: Duration::from_millis(config.database.busy_timeout_ms),
        create_table: config.database.create_table,
    }
}

/// Open the configured summary database
pub fn open_summary_repo(config: &Config) -> Result<SqliteSummaryRepository> {
    let path = config.database_path()?;
    open_summary_repo_at(path, config)
}

/// Open a summary database at a custom path
pub fn open_summary_repo_at(path: PathBuf, config: &Config) -> Result<SqliteSummaryRepository> {
    SqliteSummaryRepository::open(SqliteLocation::File(path), &sqlite_options(config))
        .map_err(Error::Connection)
}
