//! Configuration types and CLI options.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and library configuration.
///
/// The binary parses this with clap; library callers can construct it
/// directly.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mail_posture",
    version,
    about = "Audit mail-related DNS records and classify the mail-filter provider and email-authentication posture."
)]
pub struct Config {
    /// Domains to audit (comma separated, or pass the flag multiple times)
    #[arg(short, long, value_delimiter = ',', required = true, num_args = 1..)]
    pub domains: Vec<String>,

    /// DNS resolver to query
    #[arg(long = "dns-server", default_value = "8.8.8.8")]
    pub dns_server: IpAddr,

    /// Write a CSV report
    #[arg(long)]
    pub csv: bool,

    /// Directory the CSV report is written to (defaults to the desktop)
    #[arg(long = "report-location")]
    pub report_location: Option<PathBuf>,

    /// File name for the CSV report (defaults to a timestamped name)
    #[arg(long)]
    pub file: Option<String>,

    /// Write one <domain>-DnsReport.html per domain
    #[arg(long)]
    pub html: bool,

    /// Show raw SPF/DMARC/TXT/DKIM record text in the console output
    #[arg(long)]
    pub details: bool,

    /// Ask the recommendation service for free-text advice (reads the
    /// credential from the environment)
    #[arg(long)]
    pub recommend: bool,

    /// Domains resolved concurrently; 1 processes strictly in sequence.
    /// Output order always matches input order.
    #[arg(long = "max-concurrency", default_value_t = 4)]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long = "timeout", default_value_t = super::DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long = "log-format", value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        // Error < Warn < Info < Debug < Trace
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }
}
