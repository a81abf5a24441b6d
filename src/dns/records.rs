//! DNS record queries (MX, TXT, DMARC, DKIM).

use anyhow::{Error, Result};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DKIM_SELECTORS;

/// Returns true when an error message means "the zone answered, there are
/// just no records" — which is a finding, not a failure.
///
/// hickory surfaces both NXDOMAIN and empty answers through the error path;
/// only timeouts and network errors should propagate as lookup failures.
pub(crate) fn is_absence_error(message: &str) -> bool {
    message.contains("no records found") || message.contains("NXDomain")
}

/// Name queried for a domain's DMARC policy.
pub(crate) fn dmarc_lookup_name(domain: &str) -> String {
    format!("_dmarc.{domain}")
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of (preference, exchange) tuples sorted by preference (lower =
/// higher priority). `Ok(vec![])` when the domain has no MX records;
/// `Err` only for actual transport failures.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<(u16, String)>, Error> {
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some((mx.preference(), mx.exchange().to_utf8()))
                    } else {
                        None
                    }
                })
                .collect();
            mx_records.sort_by_key(|(preference, _)| *preference);
            Ok(mx_records)
        }
        Err(e) => {
            let error_msg = e.to_string();
            if is_absence_error(&error_msg) {
                Ok(Vec::new())
            } else {
                log::warn!("Failed to lookup MX records for {domain}: {e}");
                Err(e.into())
            }
        }
    }
}

/// Queries TXT records for a name.
///
/// Multi-string TXT records are joined into a single payload, matching how
/// SPF and DMARC publishers split long records.
///
/// # Arguments
///
/// * `name` - The name to query (a domain, or e.g. `_dmarc.<domain>`)
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT payload strings. `Ok(vec![])` when the name has no TXT
/// records; `Err` only for actual transport failures.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, Error> {
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) => {
            let error_msg = e.to_string();
            if is_absence_error(&error_msg) {
                Ok(Vec::new())
            } else {
                log::warn!("Failed to lookup TXT records for {name}: {e}");
                Err(e.into())
            }
        }
    }
}

/// Queries the TXT records holding a domain's DMARC policy
/// (`_dmarc.<domain>`).
pub async fn lookup_dmarc_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, Error> {
    lookup_txt_records(&dmarc_lookup_name(domain), resolver).await
}

/// Probes the common DKIM selectors and returns any key records found.
///
/// DKIM selectors are not enumerable through DNS, so this checks a small
/// allowlist of the selectors major providers publish. Best-effort: a
/// failed probe is treated the same as an absent selector, since absence of
/// DKIM is itself a reportable finding.
///
/// # Returns
///
/// TXT payloads containing `DKIM1`, across all probed selectors.
pub async fn lookup_dkim_records(domain: &str, resolver: &TokioAsyncResolver) -> Vec<String> {
    let mut records = Vec::new();
    for selector in DKIM_SELECTORS {
        let name = format!("{selector}._domainkey.{domain}");
        match lookup_txt_records(&name, resolver).await {
            Ok(found) => {
                records.extend(found.into_iter().filter(|txt| txt.contains("DKIM1")));
            }
            Err(e) => {
                log::debug!("DKIM probe failed for {name}: {e}");
            }
        }
    }
    records
}
