//! Table definition and statements for `productivity_summary`

use depot_domain::model::{COLUMNS, TABLE_NAME};

/// The 33 data columns of `PersistedRow` plus a surrogate `id` row key.
/// `id` is never bound by the insert.
pub(crate) const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS productivity_summary (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    planned_schedules     INTEGER NOT NULL,
    planned_services      INTEGER NOT NULL,
    planned_km            INTEGER NOT NULL,
    actual_services       INTEGER NOT NULL,
    actual_km             INTEGER NOT NULL,
    service_variance      INTEGER NOT NULL,
    km_variance           INTEGER NOT NULL,
    total_drivers         INTEGER NOT NULL,
    available1            INTEGER NOT NULL,
    available2            REAL    NOT NULL,
    attending_drivers     REAL    NOT NULL,
    driver_shortage       REAL    NOT NULL,
    on_duty               REAL    NOT NULL,
    drivers_for_bus       REAL    NOT NULL,
    km_per_driver         REAL    NOT NULL,
    services_per_driver   REAL    NOT NULL,
    created_at            TEXT    NOT NULL,
    medically_unfit       INTEGER NOT NULL,
    suspended_drivers     INTEGER NOT NULL,
    weekly_off            REAL    NOT NULL,
    special_off           REAL    NOT NULL,
    others                REAL    NOT NULL,
    long_leave            REAL    NOT NULL,
    sick_leave            REAL    NOT NULL,
    long_absent           INTEGER NOT NULL,
    short_leave           INTEGER NOT NULL,
    spot_absent           REAL    NOT NULL,
    drivers_required      INTEGER NOT NULL,
    double_duty           REAL    NOT NULL,
    driver_per_schedule   REAL    NOT NULL,
    off_cancel            REAL    NOT NULL,
    drivers_as_conductors INTEGER NOT NULL,
    entry_date            TEXT    NOT NULL
);
";

/// `INSERT INTO productivity_summary (...) VALUES (?1, ..., ?33)`
pub(crate) fn insert_statement() -> String {
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TABLE_NAME,
        COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

pub(crate) fn count_statement() -> String {
    format!("SELECT COUNT(*) FROM {}", TABLE_NAME)
}
