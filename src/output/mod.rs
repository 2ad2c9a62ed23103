//! Output formatting for split results.
//!
//! - [`export`] - clipboard text and one-column CSV export
//! - [`terminal`] - summary and subnet table
//! - [`render_json`] - JSON report

mod export;
mod terminal;

pub use export::{
    clipboard_text, csv_string, export_csv_file, write_csv, CSV_FILE_NAME, CSV_HEADER,
};
pub use terminal::{display_count, format_field, group_thousands, render_table};

use crate::error::Result;
use crate::SplitResult;

/// Pretty JSON with the summary and every subnet record.
pub fn render_json(result: &SplitResult) -> Result<String> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        summary: crate::processing::Summary,
        subnets: &'a [crate::models::SubnetRecord],
    }

    let report = Report {
        summary: result.summary(),
        subnets: &result.subnets,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
