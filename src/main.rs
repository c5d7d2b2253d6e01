//! Desk Audit & Risk Console - Entry Point

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Desk Audit & Risk Console - TUI for desk audits and fraud risk rules
#[derive(Parser, Debug)]
#[command(name = "darc")]
#[command(version)]
#[command(about = "TUI dashboard for insurance desk audits and fraud risk rules")]
pub struct Args {
    /// Path to a JSONL records file (use --demo to run without one)
    pub file: Option<PathBuf>,

    /// Use the built-in demo dataset instead of a records file
    #[arg(long)]
    pub demo: bool,

    /// Role to sign in as
    #[arg(long, value_parser = ["ro_admin", "ho_admin", "desk_auditor"])]
    pub role: Option<String>,

    /// Rows per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Claim-date range start, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Claim-date range end, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Trigger-type filter
    #[arg(long, value_parser = ["Ai", "Manual"])]
    pub trigger: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("'{raw}' is not a YYYY-MM-DD date"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = darc::config::load_config_with_precedence(args.config.clone())?;
        let merged = darc::config::merge_config(config_file);
        let with_env = darc::config::apply_env_overrides(merged);
        darc::config::apply_cli_overrides(
            with_env,
            darc::config::CliOverrides {
                role: args.role.as_deref().and_then(darc::model::UserRole::parse),
                page_size: args.page_size.map(|n| n as usize),
                start_date: args.start_date,
                end_date: args.end_date,
                trigger: args
                    .trigger
                    .as_deref()
                    .and_then(darc::model::TriggerType::parse),
            },
        )
    };

    darc::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let backend = darc::source::detect_backend(args.file.clone(), args.demo)?;

    darc::view::run_with_backend(Box::new(backend), config)?;

    Ok(())
}
