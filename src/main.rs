//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `mail_posture` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Report rendering and exit codes
//!
//! All lookup and classification logic lives in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use mail_posture::initialization::init_logger_with;
use mail_posture::report::{
    default_csv_dir, default_csv_filename, export_csv, export_html, render_table,
};
use mail_posture::{run_audit, AuditReport, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (if present) so the
    // recommendation API credential never has to live in the shell profile.
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let audit = match run_audit(config.clone()).await {
        Ok(audit) => audit,
        Err(e) => {
            eprintln!("mail_posture error: {e:#}");
            process::exit(1);
        }
    };

    if audit.reports.is_empty() {
        eprintln!("mail_posture error: no valid domains to audit");
        process::exit(1);
    }

    print!("{}", render_table(&audit.reports, config.details));

    if let Err(e) = write_exports(&config, &audit) {
        eprintln!("mail_posture error: {e:#}");
        process::exit(1);
    }

    println!(
        "Audited {} domain{} in {:.1}s",
        audit.reports.len(),
        if audit.reports.len() == 1 { "" } else { "s" },
        audit.elapsed_seconds
    );

    // Lookup failures degrade to sentinel values; the run only counts as
    // failed when not a single domain could be resolved at all.
    if audit.failed_domains == audit.reports.len() {
        eprintln!("mail_posture error: no domain could be resolved");
        process::exit(1);
    }

    Ok(())
}

/// Writes the requested file outputs. Write failures are fatal.
fn write_exports(config: &Config, audit: &AuditReport) -> Result<()> {
    if config.csv {
        let now = chrono::Local::now();
        let dir = config
            .report_location
            .clone()
            .unwrap_or_else(default_csv_dir);
        let filename = config
            .file
            .clone()
            .unwrap_or_else(|| default_csv_filename(&config.domains, now));
        let path: PathBuf = dir.join(filename);
        let rows = export_csv(&audit.reports, &path, now)?;
        println!("Appended {} row{} to {}", rows, if rows == 1 { "" } else { "s" }, path.display());
    }

    if config.html {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        for report in &audit.reports {
            let path = export_html(report, &cwd)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
