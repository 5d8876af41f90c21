//! End-to-end tests for the depot-productivity binary
//!
//! Each test runs the compiled binary with its config and data directories
//! pointed at a temporary directory.

use depot_infra::persistence::{SqliteLocation, SqliteOptions, SqliteSummaryRepository};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const KHAMMAM_INPUT: &str = r#"
depot = "Khammam"
mode = "urban"
planned_services = 160
planned_km = 8000
actual_services = 150
actual_km = 7500
total_drivers = 100
medically_unfit = 5
suspended_drivers = 2
weekly_off = 10.0
special_off = 5.0
others = 0.0
long_leave = 0.0
sick_leave = 0.0
spot_absent = 3.0
double_duty = 0.0
off_cancel = 0.0
driver_per_schedule = 0.0
drivers_required = 0
"#;

struct CliEnv {
    dir: TempDir,
}

impl CliEnv {
    fn new() -> Self {
        let env = Self {
            dir: tempdir().unwrap(),
        };
        std::fs::write(env.input_path(), KHAMMAM_INPUT).unwrap();
        env
    }

    fn input_path(&self) -> PathBuf {
        self.dir.path().join("khammam.toml")
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("productivity.db")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_depot-productivity"))
            .args(args)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env_remove("DEPOT_PRODUCTIVITY_DB")
            .env("RUST_LOG", "warn")
            .output()
            .unwrap()
    }

    fn submit(&self, db: &Path, extra: &[&str]) -> Output {
        let input = self.input_path();
        let mut args = vec![
            "submit",
            input.to_str().unwrap(),
            "--db",
            db.to_str().unwrap(),
            "--entry-date",
            "2025-02-10",
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// A database whose summary table refuses every insert
    fn rejecting_db(&self) -> PathBuf {
        let path = self.db_path();
        let repo =
            SqliteSummaryRepository::open(SqliteLocation::File(path.clone()), &SqliteOptions::default())
                .unwrap();
        repo.connection()
            .execute_batch(
                "CREATE TRIGGER reject_insert BEFORE INSERT ON productivity_summary
                 BEGIN SELECT RAISE(ABORT, 'rejected by trigger'); END;",
            )
            .unwrap();
        repo.close().unwrap();
        path
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ============================================================================
// submit
// ============================================================================

#[test]
fn test_submit_stores_row_and_exits_zero() {
    let env = CliEnv::new();
    let db = env.db_path();

    let output = env.submit(&db, &[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Data inserted successfully"));
    assert!(stdout(&output).contains("100.00"));

    let status = env.run(&["status", "--db", db.to_str().unwrap(), "--format", "json"]);
    assert_eq!(status.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_str(&stdout(&status)).unwrap();
    assert_eq!(report["rows"], 1);
    assert_eq!(report["alive"], true);
}

#[test]
fn test_write_failure_renders_summary_and_exits_one() {
    let env = CliEnv::new();
    let db = env.rejecting_db();

    let output = env.submit(&db, &[]);
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("Productivity Summary"));
    assert!(out.contains("KM per Driver"));
    assert!(out.contains("100.00"));
    assert!(stderr(&output).contains("Failed to insert data"));
}

#[test]
fn test_write_failure_json_report() {
    let env = CliEnv::new();
    let db = env.rejecting_db();

    let output = env.submit(&db, &["--format", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["persisted"], false);
    assert!(report["row_id"].is_null());
    assert!(report["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to insert data"));
    assert_eq!(report["entry_date"], "2025-02-10");
    assert_eq!(report["summary"]["km_per_driver"], 100.0);
    assert_eq!(report["summary"]["service_variance"], -10);
}

#[test]
fn test_unreachable_database_halts() {
    let env = CliEnv::new();
    let blocker = env.dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let output = env.submit(&blocker.join("productivity.db"), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Error connecting to database"));
    assert!(!stdout(&output).contains("Productivity Summary"));
}

// ============================================================================
// Other commands
// ============================================================================

#[test]
fn test_compute_needs_no_database() {
    let env = CliEnv::new();
    let input = env.input_path();

    let output = env.run(&["compute", input.to_str().unwrap(), "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));
    let computation: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(computation["summary"]["attending_drivers"], 75.0);
    assert_eq!(computation["summary"]["services_per_driver"], 2.0);
    assert!(!env.db_path().exists());
}

#[test]
fn test_template_carries_benchmark_hints() {
    let env = CliEnv::new();
    let output = env.run(&["template", "--depot", "Mahaboobnagar", "--mode", "urban"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.contains("#   weekly_off (13.6 → 14.0)"));
    assert!(text.contains("#   total_drivers (571 → 544)"));
    assert!(text.contains("planned_km = 23739"));
}
