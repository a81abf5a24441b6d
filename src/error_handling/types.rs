//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for report output.
///
/// Output-write failures are fatal for the invocation, unlike lookup
/// failures which degrade to sentinel values.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Non-fatal failure categories counted during a run.
///
/// These are failures to *answer* (timeouts, unreachable resolver), never
/// "no records found" — an empty answer is a posture finding, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    DnsMxLookupError,
    DnsTxtLookupError,
    DnsDmarcLookupError,
    DnsDkimLookupError,
    AdviceRequestError,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::DnsTxtLookupError => "DNS TXT lookup error",
            ErrorType::DnsDmarcLookupError => "DNS DMARC lookup error",
            ErrorType::DnsDkimLookupError => "DNS DKIM lookup error",
            ErrorType::AdviceRequestError => "Recommendation request error",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
