//! Core data structures shared across the lookup, classification, and
//! rendering stages.

/// Sentinel shown wherever a domain has no MX records at all.
pub const NO_MX_SENTINEL: &str = "No MX Record Found";

/// Mail-filter provider label derived from the primary MX target.
///
/// Variants map 1:1 to the ordered substring rules in
/// [`crate::classify::classify_provider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Proofpoint,
    ExchangeOnline,
    OutlookCom,
    Mimecast,
    Sophos,
    Internal,
    Barracuda,
    Google,
    GoDaddy,
    /// MX records exist but match no known provider rule.
    Other,
    /// No MX records at all.
    None,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Proofpoint => "Proofpoint",
            Provider::ExchangeOnline => "Exchange Online",
            Provider::OutlookCom => "Outlook.com",
            Provider::Mimecast => "Mimecast",
            Provider::Sophos => "Sophos",
            Provider::Internal => "Internal email server",
            Provider::Barracuda => "Barracuda",
            Provider::Google => "Google",
            Provider::GoDaddy => "GoDaddy",
            Provider::Other => "Other",
            Provider::None => "None",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SPF enforcement mode parsed from a single SPF record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpfMode {
    /// Record carries the `~all` marker.
    SoftFail,
    /// Record carries the `-all` marker.
    HardFail,
    /// Record carries neither marker.
    Unspecified,
}

impl SpfMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpfMode::SoftFail => "SoftFail mode",
            SpfMode::HardFail => "HardFail mode",
            SpfMode::Unspecified => "Unspecified",
        }
    }
}

/// Outcome of SPF evaluation for one domain.
///
/// Zero or multiple records are reportable misconfigurations, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpfFinding {
    Missing,
    Multiple,
    Present { record: String, mode: SpfMode },
}

impl SpfFinding {
    /// Short label used in the console table and CSV.
    pub fn summary(&self) -> String {
        match self {
            SpfFinding::Missing => "MISCONFIGURATION: No SPF record.".to_string(),
            SpfFinding::Multiple => "MISCONFIGURATION: Multiple SPF records.".to_string(),
            SpfFinding::Present { mode, .. } => mode.as_str().to_string(),
        }
    }

    /// Raw record text, if exactly one record was present.
    pub fn record(&self) -> Option<&str> {
        match self {
            SpfFinding::Present { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// DMARC policy mode parsed from a single DMARC record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmarcMode {
    Quarantine,
    Reject,
    /// `p=none` — the domain only collects reports.
    ReportOnly,
}

impl DmarcMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DmarcMode::Quarantine => "Quarantine mode",
            DmarcMode::Reject => "Reject mode",
            DmarcMode::ReportOnly => "Reporting only mode",
        }
    }
}

/// Outcome of DMARC evaluation for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DmarcFinding {
    Missing,
    Multiple,
    /// Exactly one record was found but no policy could be parsed from it.
    Invalid { record: String },
    Present { record: String, mode: DmarcMode },
}

impl DmarcFinding {
    /// Short label used in the console table and CSV.
    pub fn summary(&self) -> String {
        match self {
            DmarcFinding::Missing => "MISCONFIGURATION: No DMARC record.".to_string(),
            DmarcFinding::Multiple => "MISCONFIGURATION: Multiple DMARC records.".to_string(),
            DmarcFinding::Invalid { .. } => "MISCONFIGURATION: Invalid DMARC record.".to_string(),
            DmarcFinding::Present { mode, .. } => mode.as_str().to_string(),
        }
    }

    /// Raw record text, if exactly one record was present.
    pub fn record(&self) -> Option<&str> {
        match self {
            DmarcFinding::Invalid { record } | DmarcFinding::Present { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Everything the pipeline learned about one domain.
///
/// Built once per input domain and immutable afterwards; the renderers only
/// read it. Collected into a `Vec` whose order matches the input order.
#[derive(Debug, Clone)]
pub struct DomainReport {
    pub domain: String,
    /// Raw (preference, exchange) pairs, sorted by preference.
    pub mx_records: Vec<(u16, String)>,
    /// Primary mail exchanger, or [`NO_MX_SENTINEL`].
    pub mx_target: String,
    pub provider: Provider,
    pub spf: SpfFinding,
    pub dmarc: DmarcFinding,
    /// Raw TXT payloads at the domain apex.
    pub txt_records: Vec<String>,
    /// DKIM key records found under `<selector>._domainkey.<domain>`.
    pub dkim_records: Vec<String>,
    /// True when every primary lookup (MX, TXT, DMARC) failed outright, as
    /// opposed to answering with empty record sets.
    pub lookup_failed: bool,
    /// Free-text output from the recommendation service, when requested.
    pub recommendations: Option<String>,
}
