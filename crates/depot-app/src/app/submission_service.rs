//! Submission Service - compute and record one day's productivity summary
//!
//! One session covers one unit of work:
//! 1. Open the summary database (a failure here halts the session)
//! 2. Derive metrics from the entered record
//! 3. Append exactly one row per submission
//! 4. Hand back the summary whether or not the write succeeded
//! 5. Close the connection

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use depot_domain::model::{DerivedRecord, InputRecord, PersistedRow, ProductivitySummary, ReasonCheck};
use depot_domain::repository::ProductivitySummaryRepository;
use depot_domain::service::{derive, reason_checks, summarize};
use depot_infra::persistence::SqliteSummaryRepository;
use depot_types::{Error, Result};

use crate::config::Config;
use crate::repository::open_summary_repo;

/// Everything computed from one input record
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Computation {
    pub input: InputRecord,
    pub derived: DerivedRecord,
    pub summary: ProductivitySummary,
    pub reason_checks: [ReasonCheck; 2],
}

/// Derive without touching the database
pub fn compute(input: InputRecord) -> Computation {
    let derived = derive(&input);
    let summary = summarize(&input, &derived);
    let reason_checks = reason_checks(&input, &derived);
    Computation {
        input,
        derived,
        summary,
        reason_checks,
    }
}

/// Result of one submit action
#[derive(Debug)]
pub struct Submission {
    pub computation: Computation,
    pub created_at: NaiveDateTime,
    pub entry_date: NaiveDate,
    /// Row id on success, `Error::Write` on failure
    pub outcome: Result<i64>,
}

impl Submission {
    pub fn is_persisted(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn status_message(&self) -> String {
        match &self.outcome {
            Ok(id) => format!("Data inserted successfully (row {})", id),
            Err(e) => e.to_string(),
        }
    }
}

/// A database connection held for the length of one unit of work
pub struct SummarySession<R: ProductivitySummaryRepository> {
    repo: R,
}

impl SummarySession<SqliteSummaryRepository> {
    /// Acquire the configured database; `Error::Connection` if unreachable
    pub fn open(config: &Config) -> Result<Self> {
        let repo = open_summary_repo(config)?;
        info!(location = %repo.location(), "Session opened");
        Ok(Self::new(repo))
    }

    /// Release the connection. Failures are logged, not raised.
    pub fn close(self) {
        let location = self.repo.location().clone();
        match self.repo.close() {
            Ok(()) => info!(location = %location, "Session closed"),
            Err(e) => warn!(location = %location, error = %e, "Session close skipped"),
        }
    }
}

impl<R: ProductivitySummaryRepository> SummarySession<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Compute and append, stamping the current local time
    pub fn submit(&self, input: InputRecord, entry_date: NaiveDate) -> Submission {
        self.submit_at(input, Local::now().naive_local(), entry_date)
    }

    pub fn submit_at(
        &self,
        input: InputRecord,
        created_at: NaiveDateTime,
        entry_date: NaiveDate,
    ) -> Submission {
        let computation = compute(input);
        let row = PersistedRow::new(
            &computation.input,
            &computation.derived,
            created_at,
            entry_date,
        );

        let outcome = self.repo.append(&row).map_err(Error::Write);
        match &outcome {
            Ok(id) => info!(
                id,
                depot = %computation.input.depot,
                entry_date = %entry_date,
                "Productivity summary stored"
            ),
            Err(e) => warn!(
                depot = %computation.input.depot,
                error = %e,
                "Productivity summary not stored"
            ),
        }

        Submission {
            computation,
            created_at,
            entry_date,
            outcome,
        }
    }
}
