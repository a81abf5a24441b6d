//! Renderer tests.

use chrono::TimeZone;

use super::*;
use crate::models::{
    DmarcFinding, DmarcMode, DomainReport, Provider, SpfFinding, SpfMode, NO_MX_SENTINEL,
};

fn sample_report() -> DomainReport {
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
        txt_records: vec!["v=spf1 include:_spf.example.com ~all".to_string()],
        dkim_records: vec!["v=DKIM1; k=rsa; p=MIIB<snip>".to_string()],
        lookup_failed: false,
        recommendations: None,
    }
}

fn empty_report() -> DomainReport {
    DomainReport {
        domain: "empty.example".to_string(),
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

#[test]
fn table_contains_summary_columns() {
    let rendered = render_table(&[sample_report(), empty_report()], false);
    assert!(rendered.contains("Domain"));
    assert!(rendered.contains("example.com"));
    assert!(rendered.contains("Proofpoint"));
    assert!(rendered.contains("SoftFail mode"));
    assert!(rendered.contains("Reject mode"));
    assert!(rendered.contains("No MX Record Found"));
    assert!(rendered.contains("MISCONFIGURATION: No SPF record."));
    // Raw record text only appears with --details
    assert!(!rendered.contains("v=DKIM1"));
}

#[test]
fn table_details_show_raw_records() {
    let rendered = render_table(&[sample_report()], true);
    assert!(rendered.contains("v=spf1 include:_spf.example.com ~all"));
    assert!(rendered.contains("v=DMARC1; p=reject"));
    assert!(rendered.contains("v=DKIM1"));
}

#[test]
fn table_rows_preserve_input_order() {
    let rendered = render_table(&[empty_report(), sample_report()], false);
    let empty_pos = rendered.find("empty.example").unwrap();
    let sample_pos = rendered.find("example.com").unwrap();
    assert!(empty_pos < sample_pos);
}

#[test]
fn default_csv_filename_includes_domains_and_timestamp() {
    let now = chrono::Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let name = default_csv_filename(
        &["a.com".to_string(), "b.com".to_string()],
        now,
    );
    assert_eq!(name, "mail-posture-a.com_b.com-20240301-123000.csv");
}

#[test]
fn html_contains_a_table_per_record_type() {
    let rendered = render_html(&sample_report());
    for section in ["MX records", "SPF", "DMARC", "DKIM", "TXT records"] {
        assert!(rendered.contains(&format!("<h2>{section}</h2>")), "missing {section}");
    }
    assert!(rendered.contains("smtp.pphosted.com."));
    assert!(rendered.contains("Proofpoint"));
    // No recommendations section unless advice was collected
    assert!(!rendered.contains("<h2>Recommendations</h2>"));
}

#[test]
fn html_includes_recommendations_when_present() {
    let mut report = sample_report();
    report.recommendations = Some("Enable DMARC enforcement.".to_string());
    let rendered = render_html(&report);
    assert!(rendered.contains("<h2>Recommendations</h2>"));
    assert!(rendered.contains("Enable DMARC enforcement."));
}

#[test]
fn html_escapes_record_text() {
    let mut report = sample_report();
    report.txt_records = vec!["<script>alert('x')</script>".to_string()];
    let rendered = render_html(&report);
    assert!(!rendered.contains("<script>"));
    assert!(rendered.contains("&lt;script&gt;"));
}

#[test]
fn html_filename_matches_convention() {
    assert_eq!(html_filename("example.com"), "example.com-DnsReport.html");
}
