//! Pure classification of raw DNS records into a [`DomainReport`].
//!
//! No I/O anywhere in this module — the lookup layer hands in raw records
//! and everything here is a deterministic function of them.

mod dmarc;
mod provider;
mod spf;

pub use dmarc::evaluate_dmarc;
pub use provider::classify_provider;
pub use spf::evaluate_spf;

use crate::models::{DomainReport, NO_MX_SENTINEL};

/// Selects the primary mail exchanger: the record with the lowest
/// preference value.
///
/// On duplicate lowest preferences the first record encountered wins; real
/// zones rarely publish ties, and picking the first keeps the choice
/// deterministic for a given answer order.
pub fn primary_exchanger(mx_records: &[(u16, String)]) -> Option<&(u16, String)> {
    mx_records
        .iter()
        .reduce(|best, candidate| if candidate.0 < best.0 { candidate } else { best })
}

/// Assembles a [`DomainReport`] from one domain's raw lookups.
///
/// `lookup_failed` should be true when every primary lookup errored, so the
/// renderer can distinguish "no answer" from "answered with nothing".
pub fn build_report(
    domain: String,
    mx_records: Vec<(u16, String)>,
    txt_records: Vec<String>,
    dmarc_records: Vec<String>,
    dkim_records: Vec<String>,
    lookup_failed: bool,
) -> DomainReport {
    let mx_target = primary_exchanger(&mx_records)
        .map(|(_, exchange)| exchange.clone())
        .unwrap_or_else(|| NO_MX_SENTINEL.to_string());
    let provider = classify_provider(
        if mx_records.is_empty() { "" } else { &mx_target },
        &domain,
    );
    let spf = evaluate_spf(&txt_records);
    let dmarc = evaluate_dmarc(&dmarc_records);

    DomainReport {
        domain,
        mx_records,
        mx_target,
        provider,
        spf,
        dmarc,
        txt_records,
        dkim_records,
        lookup_failed,
        recommendations: None,
    }
}
