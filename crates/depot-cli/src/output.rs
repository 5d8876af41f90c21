//! Output formatting module

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use depot_app::app::{Computation, Submission};
use depot_app::constants::{benchmark_table, depot_override};
use depot_domain::model::BenchmarkEntry;
use depot_types::{Depot, Mode, OutputFormat, Result};

#[derive(Serialize)]
struct SubmissionReport<'a> {
    #[serde(flatten)]
    computation: &'a Computation,
    created_at: NaiveDateTime,
    entry_date: NaiveDate,
    persisted: bool,
    row_id: Option<i64>,
    message: String,
}

#[derive(Serialize)]
struct BenchmarkRow {
    key: &'static str,
    current: f64,
    estimate: f64,
}

#[derive(Serialize)]
struct DepotRow {
    depot: Depot,
    planned_schedules: Option<u32>,
    planned_services: Option<u32>,
    planned_km: Option<u64>,
}

#[derive(Serialize)]
pub struct StatusReport {
    pub database: String,
    pub alive: bool,
    pub rows: u64,
}

pub fn output_computation(output_format: OutputFormat, computation: &Computation) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(computation)?;
        println!("{}", content);
    } else {
        print_summary_table(computation);
    }

    Ok(())
}

pub fn output_submission(output_format: OutputFormat, submission: &Submission) -> Result<()> {
    if output_format == OutputFormat::Json {
        let report = SubmissionReport {
            computation: &submission.computation,
            created_at: submission.created_at,
            entry_date: submission.entry_date,
            persisted: submission.is_persisted(),
            row_id: submission.outcome.as_ref().ok().copied(),
            message: submission.status_message(),
        };
        let content = serde_json::to_string_pretty(&report)?;
        println!("{}", content);
    } else {
        if submission.is_persisted() {
            println!("{}", submission.status_message());
        } else {
            eprintln!("{}", submission.status_message());
        }
        println!("Entry date:      {}", submission.entry_date);
        print_summary_table(&submission.computation);
    }

    Ok(())
}

fn print_summary_table(computation: &Computation) {
    let input = &computation.input;

    println!("\nProductivity Summary");
    println!("====================");
    println!("Depot:           {}", input.depot);
    println!("Mode:            {}", input.mode);
    println!();

    for metric in computation.summary.metrics() {
        println!("{:<26} {:>12}", metric.label, metric.value.to_string());
    }

    println!("\n--- Reason Check ---");
    println!(
        "{:<18} {:>10} {:>14} {:>12}",
        "", "Entered", "From Reasons", "Difference"
    );
    for check in &computation.reason_checks {
        let marker = if check.is_balanced() { "" } else { "  *" };
        println!(
            "{:<18} {:>10} {:>14} {:>12}{}",
            check.label, check.entered, check.from_reasons, check.difference, marker
        );
    }
    println!("--------------------");
}

pub fn output_benchmarks(output_format: OutputFormat, mode: Mode) -> Result<()> {
    let table = benchmark_table(mode);

    if output_format == OutputFormat::Json {
        let rows: Vec<BenchmarkRow> = table
            .iter()
            .map(|&(key, BenchmarkEntry { current, estimate, .. })| BenchmarkRow {
                key,
                current,
                estimate,
            })
            .collect();
        let content = serde_json::to_string_pretty(&rows)?;
        println!("{}", content);
    } else {
        println!("\n{} Benchmarks", mode);
        println!("================");
        println!("{:<22} {:>10} {:>10}", "Metric", "Current", "Estimate");
        for (key, entry) in &table {
            println!("{:<22} {:>10} {:>10}", key, entry.current, entry.estimate);
        }
    }

    Ok(())
}

pub fn output_depots(output_format: OutputFormat) -> Result<()> {
    let rows: Vec<DepotRow> = Depot::ALL
        .iter()
        .map(|&depot| {
            let forced = depot_override(depot).copied().unwrap_or_default();
            DepotRow {
                depot,
                planned_schedules: forced.planned_schedules,
                planned_services: forced.planned_services,
                planned_km: forced.planned_km,
            }
        })
        .collect();

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&rows)?;
        println!("{}", content);
    } else {
        println!("\nDepots");
        println!("======");
        println!(
            "{:<16} {:>10} {:>10} {:>10}",
            "Depot", "Schedules", "Services", "KM"
        );
        let show = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
        for row in &rows {
            println!(
                "{:<16} {:>10} {:>10} {:>10}",
                row.depot.name(),
                show(row.planned_schedules.map(u64::from)),
                show(row.planned_services.map(u64::from)),
                show(row.planned_km)
            );
        }
    }

    Ok(())
}

pub fn output_status(output_format: OutputFormat, status: &StatusReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(status)?;
        println!("{}", content);
    } else {
        println!("Database:        {}", status.database);
        println!("Alive:           {}", if status.alive { "Yes" } else { "No" });
        println!("Stored rows:     {}", status.rows);
    }

    Ok(())
}
