//! Command handlers

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::output::{
    output_benchmarks, output_computation, output_depots, output_status, output_submission,
    StatusReport,
};
use depot_app::app::{compute, SummarySession};
use depot_app::config::Config;
use depot_app::constants::{hint, BENCHMARK_KEYS};
use depot_app::export::export_summary_to_excel;
use depot_app::input::InputDraft;
use depot_app::repository::open_summary_repo_at;
use depot_domain::repository::ProductivitySummaryRepository;
use depot_infra::document_loader::load_document;
use depot_infra::persistence::SqliteSummaryRepository;
use depot_types::{Depot, Error, Mode, OutputFormat, Result};

/// Run a command, returning the process exit code
pub fn execute(cli: Cli) -> Result<i32> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Compute { input } => cmd_compute(input, output_format),

        Commands::Submit {
            input,
            entry_date,
            xlsx,
        } => cmd_submit(
            &cli,
            &config,
            input,
            *entry_date,
            xlsx.as_deref(),
            output_format,
        ),

        Commands::Benchmarks { mode } => {
            output_benchmarks(output_format, *mode)?;
            Ok(0)
        }

        Commands::Depots => {
            output_depots(output_format)?;
            Ok(0)
        }

        Commands::Template {
            depot,
            mode,
            output,
        } => cmd_template(*depot, *mode, output.as_deref()),

        Commands::Status => cmd_status(&cli, &config, output_format),

        Commands::Config {
            show,
            set_db,
            set_output,
            reset,
        } => cmd_config(*show, set_db.clone(), *set_output, *reset),
    }
}

/// Load an input document and resolve it against defaults
fn load_input(path: &Path) -> Result<depot_domain::model::InputRecord> {
    let draft: InputDraft = load_document(path)?;
    Ok(draft.resolve()?)
}

/// Start a session on the summary database, preferring `--db` over config
fn open_session(cli: &Cli, config: &Config) -> Result<SummarySession<SqliteSummaryRepository>> {
    match &cli.db {
        Some(path) => Ok(SummarySession::new(open_summary_repo_at(path.clone(), config)?)),
        None => SummarySession::open(config),
    }
}

fn cmd_compute(input: &Path, output_format: OutputFormat) -> Result<i32> {
    let record = load_input(input)?;
    let computation = compute(record);
    output_computation(output_format, &computation)?;
    Ok(0)
}

fn cmd_submit(
    cli: &Cli,
    config: &Config,
    input: &Path,
    entry_date: Option<NaiveDate>,
    xlsx: Option<&Path>,
    output_format: OutputFormat,
) -> Result<i32> {
    // A connection failure halts before anything is computed
    let session = open_session(cli, config)?;

    let record = match load_input(input) {
        Ok(record) => record,
        Err(e) => {
            session.close();
            return Err(e);
        }
    };

    let entry_date = entry_date.unwrap_or_else(|| Local::now().date_naive());
    let submission = session.submit(record, entry_date);
    session.close();

    output_submission(output_format, &submission)?;

    if let Some(path) = xlsx {
        export_summary_to_excel(&submission.computation, entry_date, path)?;
        info!(path = %path.display(), "Summary exported");
        if output_format == OutputFormat::Table {
            println!("\nExported to: {}", path.display());
        }
    }

    Ok(if submission.is_persisted() { 0 } else { 1 })
}

fn cmd_template(depot: Depot, mode: Mode, output: Option<&Path>) -> Result<i32> {
    let draft = InputDraft::template(depot, mode)?;

    let mut content = format!("# {} ({}) input template\n", depot, mode);
    content.push_str("# Benchmarks (current → estimate):\n");
    for key in BENCHMARK_KEYS {
        content.push_str(&format!("#   {}\n", hint(key, mode, key)));
    }
    content.push('\n');
    content.push_str(&toml::to_string_pretty(&draft)?);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            println!("Template written to: {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(0)
}

fn cmd_status(cli: &Cli, config: &Config, output_format: OutputFormat) -> Result<i32> {
    let session = open_session(cli, config)?;
    let repo = session.repository();
    let alive = repo.is_alive();
    let database = repo.location().to_string();
    let rows = repo.count().map_err(Error::Connection);
    session.close();
    let rows = rows?;

    output_status(
        output_format,
        &StatusReport {
            database,
            alive,
            rows,
        },
    )?;
    Ok(0)
}

fn cmd_config(
    show: bool,
    set_db: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<i32> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(0);
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_db {
        config.database.path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(0)
}
