//! Console table rendering.

use crate::models::DomainReport;

const HEADERS: [&str; 5] = ["Domain", "MX Record", "Provider", "SPF", "DMARC"];

fn row_values(report: &DomainReport) -> [String; 5] {
    [
        report.domain.clone(),
        report.mx_target.clone(),
        report.provider.to_string(),
        report.spf.summary(),
        report.dmarc.summary(),
    ]
}

/// Renders the summary table for the collected reports.
///
/// With `details`, each domain additionally gets a block of raw record
/// text (every MX, SPF, DMARC, DKIM, and TXT record) below the table.
pub fn render_table(reports: &[DomainReport], details: bool) -> String {
    let rows: Vec<[String; 5]> = reports.iter().map(row_values).collect();

    // Column widths fit the widest cell, floored at the header width.
    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let format_row = |cells: &[String; 5]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<String>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    out.push_str(&format_row(&HEADERS.map(String::from)));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<String>>()
            .join("  "),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }

    if details {
        for report in reports {
            out.push('\n');
            out.push_str(&render_details(report));
        }
    }

    out
}

fn render_details(report: &DomainReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", report.domain));
    if report.lookup_failed {
        out.push_str("  lookups failed; values below are sentinels\n");
    }
    for (preference, exchange) in &report.mx_records {
        out.push_str(&format!("  MX    {preference:>5}  {exchange}\n"));
    }
    if let Some(record) = report.spf.record() {
        out.push_str(&format!("  SPF   {record}\n"));
    }
    if let Some(record) = report.dmarc.record() {
        out.push_str(&format!("  DMARC {record}\n"));
    }
    for record in &report.dkim_records {
        out.push_str(&format!("  DKIM  {record}\n"));
    }
    for record in &report.txt_records {
        out.push_str(&format!("  TXT   {record}\n"));
    }
    if let Some(advice) = &report.recommendations {
        out.push_str("  Recommendations:\n");
        for line in advice.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out
}
