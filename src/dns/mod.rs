//! DNS resolution adapter.
//!
//! Async lookups over `hickory-resolver` for the record types the audit
//! needs: MX, apex TXT, `_dmarc.<domain>` TXT, and DKIM selector probes.
//! Absence of records is an `Ok(empty)` answer; only transport failures
//! (timeouts, unreachable resolver) surface as errors, and the caller
//! recovers those locally.

mod records;

pub use records::{
    lookup_dkim_records, lookup_dmarc_records, lookup_mx_records, lookup_txt_records,
};

#[cfg(test)]
mod tests;
