//! Tests for CSV export: round-trip fidelity and append behavior.

use chrono::TimeZone;
use tempfile::TempDir;

use mail_posture::models::{
    DmarcFinding, DmarcMode, DomainReport, Provider, SpfFinding, SpfMode, NO_MX_SENTINEL,
};
use mail_posture::report::export_csv;

fn configured_report() -> DomainReport {
    DomainReport {
        domain: "example.com".to_string(),
        mx_records: vec![(5, "smtp.pphosted.com.".to_string())],
        mx_target: "smtp.pphosted.com.".to_string(),
        provider: Provider::Proofpoint,
        spf: SpfFinding::Present {
            record: "v=spf1 include:_spf.example.com ~all".to_string(),
            mode: SpfMode::SoftFail,
        },
        dmarc: DmarcFinding::Present {
            record: "v=DMARC1; p=reject".to_string(),
            mode: DmarcMode::Reject,
        },
        txt_records: vec![],
        dkim_records: vec!["v=DKIM1; k=rsa; p=abc".to_string()],
        lookup_failed: false,
        recommendations: None,
    }
}

fn bare_report() -> DomainReport {
    DomainReport {
        domain: "bare.example".to_string(),
        mx_records: vec![],
        mx_target: NO_MX_SENTINEL.to_string(),
        provider: Provider::None,
        spf: SpfFinding::Missing,
        dmarc: DmarcFinding::Missing,
        txt_records: vec![],
        dkim_records: vec![],
        lookup_failed: true,
        recommendations: None,
    }
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("csv should be readable");
    let headers = reader
        .headers()
        .expect("csv should have headers")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("row should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (headers, rows)
}

#[test]
fn round_trip_reproduces_classification_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posture.csv");
    let now = chrono::Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let written = export_csv(&[configured_report(), bare_report()], &path, now).unwrap();
    assert_eq!(written, 2);

    let (headers, rows) = read_rows(&path);
    assert_eq!(headers[0], "domain");
    assert_eq!(rows.len(), 2);

    let row = &rows[0];
    assert_eq!(row[0], "example.com");
    assert_eq!(row[1], "smtp.pphosted.com.");
    assert_eq!(row[2], "Proofpoint");
    assert_eq!(row[3], "v=spf1 include:_spf.example.com ~all");
    assert_eq!(row[4], "SoftFail mode");
    assert_eq!(row[5], "v=DMARC1; p=reject");
    assert_eq!(row[6], "Reject mode");
    assert_eq!(row[7], "1");

    let row = &rows[1];
    assert_eq!(row[0], "bare.example");
    assert_eq!(row[1], "No MX Record Found");
    assert_eq!(row[2], "None");
    assert_eq!(row[4], "MISCONFIGURATION: No SPF record.");
    assert_eq!(row[6], "MISCONFIGURATION: No DMARC record.");
}

#[test]
fn append_adds_rows_without_repeating_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posture.csv");
    let now = chrono::Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    export_csv(&[configured_report()], &path, now).unwrap();
    export_csv(&[bare_report()], &path, now).unwrap();

    let (_, rows) = read_rows(&path);
    assert_eq!(rows.len(), 2, "second export should append, not overwrite");
    assert_eq!(rows[0][0], "example.com");
    assert_eq!(rows[1][0], "bare.example");

    // No stray header row in the data
    assert!(rows.iter().all(|row| row[0] != "domain"));
}

#[test]
fn export_to_unwritable_path_is_an_error() {
    let result = export_csv(
        &[bare_report()],
        std::path::Path::new("/nonexistent-dir/posture.csv"),
        chrono::Local::now(),
    );
    assert!(result.is_err());
}
