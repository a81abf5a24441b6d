//! CSV export.
//!
//! All report fields, appended to a configurable file so repeated runs
//! accumulate into one report. The header row is written only when the file
//! is new or empty.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error_handling::ReportError;
use crate::models::DomainReport;

const CSV_HEADERS: [&str; 9] = [
    "domain",
    "mx_record",
    "provider",
    "spf_record",
    "spf_status",
    "dmarc_record",
    "dmarc_status",
    "dkim_selectors_found",
    "checked_at",
];

/// Default CSV location: the invoking user's desktop directory, falling
/// back to the current directory where no desktop exists (headless boxes).
pub fn default_csv_dir() -> PathBuf {
    dirs::desktop_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Default CSV filename: the domain list plus a timestamp.
pub fn default_csv_filename(domains: &[String], now: DateTime<Local>) -> String {
    let joined = domains.join("_");
    format!("mail-posture-{}-{}.csv", joined, now.format("%Y%m%d-%H%M%S"))
}

/// Appends the collected reports to a CSV file.
///
/// # Arguments
///
/// * `reports` - The reports to write, in input order
/// * `path` - Output file; created if absent, appended to otherwise
/// * `checked_at` - Timestamp recorded on every row
///
/// # Returns
///
/// The number of rows written, or a fatal [`ReportError`].
pub fn export_csv(
    reports: &[DomainReport],
    path: &Path,
    checked_at: DateTime<Local>,
) -> Result<usize, ReportError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let is_empty = file
        .metadata()
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len()
        == 0;

    let mut writer = csv::Writer::from_writer(file);
    if is_empty {
        writer.write_record(CSV_HEADERS)?;
    }

    let checked_at = checked_at.format("%Y-%m-%d %H:%M:%S").to_string();
    for report in reports {
        writer.write_record(&[
            report.domain.clone(),
            report.mx_target.clone(),
            report.provider.to_string(),
            report.spf.record().unwrap_or_default().to_string(),
            report.spf.summary(),
            report.dmarc.record().unwrap_or_default().to_string(),
            report.dmarc.summary(),
            report.dkim_records.len().to_string(),
            checked_at.clone(),
        ])?;
    }

    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(reports.len())
}
