//! SPF record evaluation.

use crate::models::{SpfFinding, SpfMode};

/// Evaluates a domain's SPF posture from its apex TXT records.
///
/// Cardinality first: zero SPF records and more than one SPF record are
/// both misconfigurations (publishing several SPF records makes receivers
/// fail evaluation outright, so no mode is derived). Exactly one record is
/// parsed for its `all` qualifier — `~all` soft-fails unauthorized senders,
/// `-all` hard-fails them, and a record with neither leaves the enforcement
/// mode unspecified.
pub fn evaluate_spf(txt_records: &[String]) -> SpfFinding {
    let spf_records: Vec<&String> = txt_records
        .iter()
        .filter(|txt| txt.contains("spf1"))
        .collect();

    match spf_records.as_slice() {
        [] => SpfFinding::Missing,
        [record] => {
            let record = record.trim().to_string();
            let mode = if record.contains("~all") {
                SpfMode::SoftFail
            } else if record.contains("-all") {
                SpfMode::HardFail
            } else {
                SpfMode::Unspecified
            };
            SpfFinding::Present { record, mode }
        }
        _ => SpfFinding::Multiple,
    }
}
