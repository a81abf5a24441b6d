//! DNS module tests.
//!
//! Network behavior is exercised through the absence-vs-failure policy
//! helpers; the lookup functions themselves are thin wrappers over the
//! resolver and are covered end to end by running the binary.

use super::records::{dmarc_lookup_name, is_absence_error};

#[test]
fn test_absence_error_no_records() {
    assert!(is_absence_error(
        "no records found for Query { name: Name(\"example.com.\") }"
    ));
}

#[test]
fn test_absence_error_nxdomain() {
    assert!(is_absence_error(
        "proto error: Label contains NXDomain response"
    ));
}

#[test]
fn test_timeout_is_not_absence() {
    assert!(!is_absence_error("request timed out"));
    assert!(!is_absence_error("connection refused"));
}

#[test]
fn test_dmarc_lookup_name() {
    assert_eq!(dmarc_lookup_name("example.com"), "_dmarc.example.com");
}
