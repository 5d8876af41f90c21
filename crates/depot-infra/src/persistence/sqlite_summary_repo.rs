//! SQLite implementation of ProductivitySummaryRepository

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::{params, Connection};
use tracing::{debug, info, warn};

use depot_domain::model::PersistedRow;
use depot_domain::repository::ProductivitySummaryRepository;
use depot_types::StoreError;

use super::schema::{count_statement, insert_statement, CREATE_TABLE};

/// Where the database lives
#[derive(Clone, Debug, PartialEq)]
pub enum SqliteLocation {
    /// File-based database
    File(PathBuf),
    /// In-memory database (for testing)
    Memory,
}

impl std::fmt::Display for SqliteLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqliteLocation::File(path) => write!(f, "{}", path.display()),
            SqliteLocation::Memory => write!(f, ":memory:"),
        }
    }
}

/// Connection options
#[derive(Clone, Debug)]
pub struct SqliteOptions {
    pub busy_timeout: Duration,
    /// Create `productivity_summary` if it does not exist yet
    pub create_table: bool,
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_millis(5000),
            create_table: true,
        }
    }
}

fn db_err(e: rusqlite::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

/// Append-only summary store on a single SQLite connection.
///
/// The connection is opened once and held until `close`.
pub struct SqliteSummaryRepository {
    conn: Connection,
    location: SqliteLocation,
    insert_sql: String,
}

impl SqliteSummaryRepository {
    /// Open the database, verify it answers, and prepare the table
    pub fn open(location: SqliteLocation, options: &SqliteOptions) -> Result<Self, StoreError> {
        info!(location = %location, "Opening productivity database");

        let conn = match &location {
            SqliteLocation::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| StoreError::Path(format!("{}: {}", parent.display(), e)))?;
                }
                Connection::open(path).map_err(db_err)?
            }
            SqliteLocation::Memory => Connection::open_in_memory().map_err(db_err)?,
        };

        conn.busy_timeout(options.busy_timeout).map_err(db_err)?;

        let repo = Self {
            conn,
            location,
            insert_sql: insert_statement(),
        };

        if !repo.is_alive() {
            return Err(StoreError::NotAlive);
        }

        if options.create_table {
            repo.conn.execute_batch(CREATE_TABLE).map_err(db_err)?;
            debug!("productivity_summary table ready");
        }

        Ok(repo)
    }

    /// Open an in-memory database with default options (for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(SqliteLocation::Memory, &SqliteOptions::default())
    }

    pub fn location(&self) -> &SqliteLocation {
        &self.location
    }

    /// Liveness check
    pub fn is_alive(&self) -> bool {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .is_ok()
    }

    /// Release the connection. Skipped with a warning if it no longer answers.
    pub fn close(self) -> Result<(), StoreError> {
        if !self.is_alive() {
            warn!(location = %self.location, "Connection not alive at close");
            return Err(StoreError::NotAlive);
        }
        let location = self.location;
        self.conn.close().map_err(|(_, e)| {
            warn!(location = %location, error = %e, "Failed to close database");
            db_err(e)
        })?;
        info!(location = %location, "Closed productivity database");
        Ok(())
    }

    /// Direct access for diagnostics and tests
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ProductivitySummaryRepository for SqliteSummaryRepository {
    fn append(&self, row: &PersistedRow) -> Result<i64, StoreError> {
        self.conn
            .execute(
                &self.insert_sql,
                params![
                    row.planned_schedules,
                    row.planned_services,
                    row.planned_km,
                    row.actual_services,
                    row.actual_km,
                    row.service_variance,
                    row.km_variance,
                    row.total_drivers,
                    row.available1,
                    row.available2,
                    row.attending_drivers,
                    row.driver_shortage,
                    row.on_duty,
                    row.drivers_for_bus,
                    row.km_per_driver,
                    row.services_per_driver,
                    row.created_at,
                    row.medically_unfit,
                    row.suspended_drivers,
                    row.weekly_off,
                    row.special_off,
                    row.others,
                    row.long_leave,
                    row.sick_leave,
                    row.long_absent,
                    row.short_leave,
                    row.spot_absent,
                    row.drivers_required,
                    row.double_duty,
                    row.driver_per_schedule,
                    row.off_cancel,
                    row.drivers_as_conductors,
                    row.entry_date,
                ],
            )
            .map_err(db_err)?;

        let id = self.conn.last_insert_rowid();
        debug!(id, entry_date = %row.entry_date, "Appended productivity summary");
        Ok(id)
    }

    fn count(&self) -> Result<u64, StoreError> {
        let n: i64 = self
            .conn
            .query_row(&count_statement(), [], |row| row.get(0))
            .map_err(db_err)?;
        Ok(n.max(0) as u64)
    }
}
