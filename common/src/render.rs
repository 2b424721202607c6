//! # schema.ini formatter
//!
//! Turns a [`SchemaDescriptor`] into the text of one `schema.ini` section:
//!
//! ```text
//! [data.csv]
//! Format=CSVDelimited
//! ColNameHeader=True
//! CharacterSet=65001
//! Col1=id Long
//! Col2=name Text width 40
//! ```
//!
//! The output is a pure function of the descriptor. Incomplete column rows are
//! filtered out instead of failing the render, so a half-filled form still
//! produces a valid section. [`render_report`] additionally tells the caller
//! which rows were left out.

use crate::error::{Result, SchemaError};
use crate::model::column::ColumnSpec;
use crate::model::file_format::FileFormat;
use crate::model::options::{OptionEntry, OptionKey};
use crate::model::schema::{ScanMode, SchemaDescriptor};
use log::debug;
use serde::{Deserialize, Serialize};

/// Rendered section plus bookkeeping about the column rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderReport {
    pub content: String,
    /// Number of `Col<n>=` lines written.
    pub emitted_columns: usize,
    /// Indices of rows with some input that did not qualify for output.
    /// Entirely blank rows are not listed. Always empty in AutoDetect mode.
    pub dropped_columns: Vec<u32>,
}

/// Renders the `schema.ini` section for `descriptor`.
pub fn render(descriptor: &SchemaDescriptor) -> Result<String> {
    render_report(descriptor).map(|report| report.content)
}

pub fn render_report(descriptor: &SchemaDescriptor) -> Result<RenderReport> {
    if let FileFormat::CustomDelimited(Some('"')) = descriptor.format {
        return Err(SchemaError::InvalidInput(
            "the double-quote character cannot be used as a delimiter".to_string(),
        ));
    }

    let mut content = format!("[{}]\n", descriptor.filename);
    content.push_str(&format!("Format={}\n", descriptor.format));
    content.push_str(&format!(
        "ColNameHeader={}\n",
        bool_literal(descriptor.has_header)
    ));

    for entry in canonical_options(&descriptor.options) {
        content.push_str(&format!("{}={}\n", entry.key, entry.value));
    }

    let mut emitted_columns = 0;
    let mut dropped_columns = Vec::new();

    match descriptor.scan_mode {
        ScanMode::AutoDetect { max_scan_rows } => {
            content.push_str(&format!("MaxScanRows={}\n", max_scan_rows));
        }
        ScanMode::Explicit => {
            let fixed_length = descriptor.format.is_fixed_length();
            let mut columns: Vec<&ColumnSpec> = descriptor.columns.iter().collect();
            columns.sort_by_key(|col| col.index);

            for col in columns {
                match column_line(col, fixed_length) {
                    Some(line) => {
                        content.push_str(&line);
                        content.push('\n');
                        emitted_columns += 1;
                    }
                    None if !col.is_blank() => dropped_columns.push(col.index),
                    None => {}
                }
            }
        }
    }

    if !dropped_columns.is_empty() {
        debug!(
            "{}: dropped incomplete column rows {:?}",
            descriptor.filename, dropped_columns
        );
    }

    Ok(RenderReport {
        content,
        emitted_columns,
        dropped_columns,
    })
}

fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Non-empty options in canonical key order. The first non-empty entry wins
/// when a key appears more than once.
fn canonical_options(options: &[OptionEntry]) -> impl Iterator<Item = &OptionEntry> {
    OptionKey::ALL.into_iter().filter_map(move |key| {
        options
            .iter()
            .find(|entry| entry.key == key && !entry.value.is_empty())
    })
}

fn column_line(col: &ColumnSpec, fixed_length: bool) -> Option<String> {
    if !col.is_complete(fixed_length) {
        return None;
    }
    let col_type = col.col_type?;
    let mut line = format!("Col{}={} {}", col.index, col.name, col_type);
    if let Some(width) = col.effective_width() {
        line.push_str(&format!(" width {}", width));
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::ColumnType;

    fn descriptor(format: FileFormat, columns: Vec<ColumnSpec>) -> SchemaDescriptor {
        SchemaDescriptor {
            filename: "data.txt".to_string(),
            format,
            has_header: false,
            columns,
            options: Vec::new(),
            scan_mode: ScanMode::Explicit,
        }
    }

    #[test]
    fn format_line_uses_specifier() {
        let d = descriptor(FileFormat::CustomDelimited(None), vec![]);
        let out = render(&d).unwrap();
        assert_eq!(out.lines().nth(1), Some("Format=Delimited( )"));
    }

    #[test]
    fn header_false_is_literal() {
        let out = render(&descriptor(FileFormat::TabDelimited, vec![])).unwrap();
        assert_eq!(out, "[data.txt]\nFormat=TabDelimited\nColNameHeader=False\n");
    }

    #[test]
    fn width_is_kept_for_delimited_formats() {
        let cols = vec![ColumnSpec::new(1, "code", ColumnType::Text).with_width(8)];
        let out = render(&descriptor(FileFormat::CommaDelimited, cols)).unwrap();
        assert!(out.ends_with("Col1=code Text width 8\n"));
    }

    #[test]
    fn zero_width_is_not_printed() {
        let cols = vec![ColumnSpec::new(1, "code", ColumnType::Text).with_width(0)];
        let out = render(&descriptor(FileFormat::CommaDelimited, cols)).unwrap();
        assert!(out.ends_with("Col1=code Text\n"));
    }

    #[test]
    fn columns_are_sorted_by_index() {
        let cols = vec![
            ColumnSpec::new(2, "b", ColumnType::Long),
            ColumnSpec::new(1, "a", ColumnType::Long),
        ];
        let out = render(&descriptor(FileFormat::CommaDelimited, cols)).unwrap();
        assert!(out.ends_with("Col1=a Long\nCol2=b Long\n"));
    }

    #[test]
    fn quote_delimiter_is_rejected() {
        let err = render(&descriptor(FileFormat::CustomDelimited(Some('"')), vec![]));
        assert!(matches!(err, Err(SchemaError::InvalidInput(_))));
    }

    #[test]
    fn report_lists_partial_rows_only() {
        let mut named_only = ColumnSpec::blank(2);
        named_only.name = "amount".to_string();
        let cols = vec![
            ColumnSpec::new(1, "id", ColumnType::Long),
            named_only,
            ColumnSpec::blank(3),
        ];
        let report = render_report(&descriptor(FileFormat::CommaDelimited, cols)).unwrap();
        assert_eq!(report.emitted_columns, 1);
        assert_eq!(report.dropped_columns, vec![2]);
    }

    #[test]
    fn duplicate_option_keeps_first_non_empty() {
        let mut d = descriptor(FileFormat::CommaDelimited, vec![]);
        d.options = vec![
            OptionEntry::new(OptionKey::CharacterSet, ""),
            OptionEntry::new(OptionKey::CharacterSet, "ANSI"),
            OptionEntry::new(OptionKey::CharacterSet, "OEM"),
        ];
        let out = render(&d).unwrap();
        assert!(out.contains("CharacterSet=ANSI\n"));
        assert!(!out.contains("OEM"));
    }
}
