//! HTML export.
//!
//! One self-contained `<domain>-DnsReport.html` per domain: a table per
//! record type plus a free-text recommendations section when the
//! recommendation service was consulted.

use std::path::{Path, PathBuf};

use crate::error_handling::ReportError;
use crate::models::DomainReport;

/// Escapes text for embedding in HTML element content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = format!("<h2>{}</h2>\n<table>\n<tr>", escape(title));
    for header in headers {
        out.push_str(&format!("<th>{}</th>", escape(header)));
    }
    out.push_str("</tr>\n");
    if rows.is_empty() {
        out.push_str(&format!(
            "<tr><td colspan=\"{}\">none found</td></tr>\n",
            headers.len()
        ));
    }
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

/// Renders the full HTML document for one domain.
pub fn render_html(report: &DomainReport) -> String {
    let mx_rows: Vec<Vec<String>> = report
        .mx_records
        .iter()
        .map(|(preference, exchange)| vec![preference.to_string(), exchange.clone()])
        .collect();
    let spf_rows: Vec<Vec<String>> = report
        .spf
        .record()
        .map(|record| vec![vec![record.to_string(), report.spf.summary()]])
        .unwrap_or_else(|| vec![vec![report.spf.summary(), String::new()]]);
    let dmarc_rows: Vec<Vec<String>> = report
        .dmarc
        .record()
        .map(|record| vec![vec![record.to_string(), report.dmarc.summary()]])
        .unwrap_or_else(|| vec![vec![report.dmarc.summary(), String::new()]]);
    let dkim_rows: Vec<Vec<String>> = report
        .dkim_records
        .iter()
        .map(|record| vec![record.clone()])
        .collect();
    let txt_rows: Vec<Vec<String>> = report
        .txt_records
        .iter()
        .map(|record| vec![record.clone()])
        .collect();

    let mut body = String::new();
    body.push_str(&format!(
        "<h1>DNS report for {}</h1>\n<p>Mail filter provider: <strong>{}</strong></p>\n",
        escape(&report.domain),
        escape(report.provider.as_str())
    ));
    body.push_str(&table("MX records", &["Preference", "Exchange"], &mx_rows));
    body.push_str(&table("SPF", &["Record", "Mode"], &spf_rows));
    body.push_str(&table("DMARC", &["Record", "Mode"], &dmarc_rows));
    body.push_str(&table("DKIM", &["Record"], &dkim_rows));
    body.push_str(&table("TXT records", &["Record"], &txt_rows));

    if let Some(advice) = &report.recommendations {
        body.push_str("<h2>Recommendations</h2>\n<pre>");
        body.push_str(&escape(advice));
        body.push_str("</pre>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>DNS report for {}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2em; }}\n\
         table {{ border-collapse: collapse; margin-bottom: 1.5em; }}\n\
         th, td {{ border: 1px solid #999; padding: 4px 10px; text-align: left; }}\n\
         th {{ background: #eee; }}\n\
         </style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(&report.domain),
        body
    )
}

/// Name of the HTML report file for a domain.
pub fn html_filename(domain: &str) -> String {
    format!("{domain}-DnsReport.html")
}

/// Writes the HTML report for one domain into `dir`.
///
/// # Returns
///
/// The path written, or a fatal [`ReportError`].
pub fn export_html(report: &DomainReport, dir: &Path) -> Result<PathBuf, ReportError> {
    let path = dir.join(html_filename(&report.domain));
    std::fs::write(&path, render_html(report)).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
