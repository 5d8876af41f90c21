//! Integration tests for submitting productivity summaries

use chrono::NaiveDate;
use depot_app::app::{compute, SummarySession};
use depot_app::config::Config;
use depot_app::input::InputDraft;
use depot_app::repository::open_summary_repo_at;
use depot_domain::model::{InputRecord, MetricValue, PersistedRow};
use depot_domain::repository::ProductivitySummaryRepository;
use depot_infra::document_loader::load_document;
use depot_infra::persistence::SqliteSummaryRepository;
use depot_types::{Depot, Error, Mode, StoreError};
use tempfile::tempdir;

const MAHABOOBNAGAR_INPUT: &str = r#"
depot = "Mahaboobnagar"
mode = "urban"
planned_services = 999
actual_services = 55
actual_km = 23000
total_drivers = 100
medically_unfit = 5
suspended_drivers = 2
weekly_off = 10.0
special_off = 5.0
others = 0.0
long_leave = 0.0
sick_leave = 4.0
spot_absent = 3.0
double_duty = 0.0
off_cancel = 0.0

[medically_unfit_reasons]
spinal_disc = 2
neuro = 1

[sick_leave_reasons]
vision_color_blindness = 4
"#;

fn entry_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
}

fn khammam_input() -> InputRecord {
    InputRecord {
        planned_services: 160,
        planned_km: 8000,
        actual_services: 150,
        actual_km: 7500,
        total_drivers: 100,
        medically_unfit: 5,
        suspended_drivers: 2,
        weekly_off: 10.0,
        special_off: 5.0,
        spot_absent: 3.0,
        ..InputRecord::empty(Depot::Khammam, Mode::Rural)
    }
}

/// Rejects every append, as a database with a violated constraint would
struct RejectingRepo;

impl ProductivitySummaryRepository for RejectingRepo {
    fn append(&self, _row: &PersistedRow) -> Result<i64, StoreError> {
        Err(StoreError::Database("Data too long for column".to_string()))
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(0)
    }
}

// ============================================================================
// End-to-end flow
// ============================================================================

#[test]
fn test_input_file_to_stored_row() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("mahaboobnagar.toml");
    std::fs::write(&input_path, MAHABOOBNAGAR_INPUT).unwrap();

    let draft: InputDraft = load_document(&input_path).unwrap();
    let input = draft.resolve().unwrap();
    assert_eq!(input.planned_services, 60);
    assert_eq!(input.planned_km, 23739);

    let repo = open_summary_repo_at(dir.path().join("productivity.db"), &Config::default()).unwrap();
    let session = SummarySession::new(repo);
    let submission = session.submit(input, entry_date());

    assert!(submission.is_persisted());
    let summary = &submission.computation.summary;
    assert_eq!(summary.service_variance, -5);
    assert_eq!(summary.km_variance, -739);
    assert_eq!(summary.available1, 93);
    assert_eq!(summary.available2, 74.0);
    assert_eq!(summary.attending_drivers, 71.0);

    let checks = &submission.computation.reason_checks;
    assert_eq!(checks[0].difference, 2.0);
    assert_eq!(checks[1].difference, 0.0);
    assert!(checks[1].is_balanced());

    let id = *submission.outcome.as_ref().unwrap();
    let (planned_km, km_variance, stored_date): (i64, i64, NaiveDate) = session
        .repository()
        .connection()
        .query_row(
            "SELECT planned_km, km_variance, entry_date FROM productivity_summary WHERE id = ?1",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(planned_km, 23739);
    assert_eq!(km_variance, -739);
    assert_eq!(stored_date, entry_date());

    session.close();
}

#[test]
fn test_each_submit_appends_one_row() {
    let repo = SqliteSummaryRepository::open_in_memory().unwrap();
    let session = SummarySession::new(repo);

    for _ in 0..3 {
        let submission = session.submit(khammam_input(), entry_date());
        assert!(submission.is_persisted());
    }

    assert_eq!(session.repository().count().unwrap(), 3);
}

#[test]
fn test_rates_shown_with_two_decimals() {
    let computation = compute(khammam_input());
    let metrics = computation.summary.metrics();

    let km_per_driver = metrics
        .iter()
        .find(|m| m.label == "KM per Driver")
        .unwrap();
    assert_eq!(km_per_driver.value, MetricValue::Rate(100.0));
    assert_eq!(km_per_driver.value.to_string(), "100.00");
}

#[test]
fn test_zero_attendance_stores_zero_rates() {
    let input = InputRecord {
        actual_km: 5000,
        actual_services: 40,
        ..InputRecord::empty(Depot::Sangareddy, Mode::Urban)
    };
    let repo = SqliteSummaryRepository::open_in_memory().unwrap();
    let session = SummarySession::new(repo);
    let submission = session.submit(input, entry_date());

    assert!(submission.is_persisted());
    assert_eq!(submission.computation.summary.km_per_driver, 0.0);
    assert_eq!(submission.computation.summary.services_per_driver, 0.0);
}

// ============================================================================
// Persistence failures
// ============================================================================

#[test]
fn test_write_failure_keeps_summary() {
    let session = SummarySession::new(RejectingRepo);
    let submission = session.submit(khammam_input(), entry_date());

    assert!(!submission.is_persisted());
    assert_eq!(
        submission.status_message(),
        "Failed to insert data: Database error: Data too long for column"
    );
    assert_eq!(submission.computation, compute(khammam_input()));
    assert_eq!(submission.computation.summary.service_variance, -10);
}

#[test]
fn test_constraint_failure_leaves_no_row() {
    let repo = SqliteSummaryRepository::open_in_memory().unwrap();
    repo.connection()
        .execute_batch(
            "CREATE TRIGGER reject_insert BEFORE INSERT ON productivity_summary
             BEGIN SELECT RAISE(ABORT, 'rejected by trigger'); END;",
        )
        .unwrap();
    let session = SummarySession::new(repo);

    let submission = session.submit(khammam_input(), entry_date());

    assert!(matches!(submission.outcome, Err(Error::Write(_))));
    assert_eq!(submission.computation.summary.attending_drivers, 75.0);
    assert_eq!(session.repository().count().unwrap(), 0);
}

#[test]
fn test_unreachable_database_halts_session() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = open_summary_repo_at(blocker.join("productivity.db"), &Config::default());
    match result {
        Err(e) => {
            assert!(matches!(e, Error::Connection(_)));
            assert!(e.to_string().starts_with("Error connecting to database"));
        }
        Ok(_) => panic!("expected a connection error"),
    }
}

#[test]
fn test_file_database_reopened_by_session() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("data").join("productivity.db");

    let first = SummarySession::new(open_summary_repo_at(db_path.clone(), &Config::default()).unwrap());
    assert!(first.submit(khammam_input(), entry_date()).is_persisted());
    first.close();

    let second = SummarySession::new(open_summary_repo_at(db_path, &Config::default()).unwrap());
    assert_eq!(second.repository().count().unwrap(), 1);
    second.close();
}
