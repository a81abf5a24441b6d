//! DMARC record evaluation.

use crate::models::{DmarcFinding, DmarcMode};

/// Evaluates a domain's DMARC posture from the `_dmarc.<domain>` TXT
/// records.
///
/// Same cardinality logic as SPF: zero records and more than one record are
/// misconfigurations. Exactly one record is scanned for its policy tag;
/// a record with no recognizable `p=` policy (including an empty record) is
/// an invalid DMARC record rather than a policy.
pub fn evaluate_dmarc(txt_records: &[String]) -> DmarcFinding {
    let dmarc_records: Vec<&String> = txt_records
        .iter()
        .filter(|txt| txt.contains("DMARC1"))
        .collect();

    match dmarc_records.as_slice() {
        [] => DmarcFinding::Missing,
        [record] => {
            let record = record.trim().to_string();
            let mode = if record.contains("p=quarantine") {
                Some(DmarcMode::Quarantine)
            } else if record.contains("p=reject") {
                Some(DmarcMode::Reject)
            } else if record.contains("p=none") {
                Some(DmarcMode::ReportOnly)
            } else {
                None
            };
            match mode {
                Some(mode) => DmarcFinding::Present { record, mode },
                None => DmarcFinding::Invalid { record },
            }
        }
        _ => DmarcFinding::Multiple,
    }
}
