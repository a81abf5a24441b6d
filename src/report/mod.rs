//! Report rendering: console table, CSV export, HTML export.

mod csv;
mod html;
mod table;

pub use csv::{default_csv_dir, default_csv_filename, export_csv};
pub use html::{export_html, html_filename, render_html};
pub use table::render_table;

#[cfg(test)]
mod tests;
