//! Form state behind the schema.ini editor.
//!
//! The widgets in the frontend only read and write this state; the descriptor
//! handed to the formatter is assembled from it with
//! [`SchemaForm::to_descriptor`]. Keeping it here lets the row numbering and
//! delimiter rules be tested without a browser.

use crate::model::column::{ColumnSpec, ColumnType};
use crate::model::file_format::FileFormat;
use crate::model::options::{OptionEntry, OptionKey};
use crate::model::schema::{ScanMode, SchemaDescriptor};

/// Rows shown when the editor opens.
pub const INITIAL_ROWS: u32 = 10;

/// Shown under the delimiter input when `"` was typed.
pub const QUOTE_DELIMITER_WARNING: &str = "二重引用符 (\") は使用できません";

/// Format radio choice, before the custom delimiter is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChoice {
    Comma,
    Tab,
    Fixed,
    Custom,
}

impl FormatChoice {
    pub const ALL: [FormatChoice; 4] = [
        FormatChoice::Comma,
        FormatChoice::Tab,
        FormatChoice::Fixed,
        FormatChoice::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormatChoice::Comma => "カンマ区切り",
            FormatChoice::Tab => "タブ区切り",
            FormatChoice::Fixed => "固定長",
            FormatChoice::Custom => "任意文字区切り",
        }
    }

    pub fn to_format(self, delimiter: Option<char>) -> FileFormat {
        match self {
            FormatChoice::Comma => FileFormat::CommaDelimited,
            FormatChoice::Tab => FileFormat::TabDelimited,
            FormatChoice::Fixed => FileFormat::FixedLength,
            FormatChoice::Custom => FileFormat::CustomDelimited(delimiter),
        }
    }
}

/// Delimiter after validation of the raw text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterInput {
    pub delimiter: Option<char>,
    pub warning: Option<&'static str>,
}

/// Validates the custom delimiter input.
///
/// Only the first character counts. A double quote is replaced by a space and
/// reported through `warning`.
pub fn resolve_delimiter(input: &str) -> DelimiterInput {
    match input.chars().next() {
        Some('"') => DelimiterInput {
            delimiter: Some(' '),
            warning: Some(QUOTE_DELIMITER_WARNING),
        },
        first => DelimiterInput {
            delimiter: first,
            warning: None,
        },
    }
}

/// Editable column rows with stable 1-based numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    rows: Vec<ColumnSpec>,
}

impl Default for ColumnTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnTable {
    /// Ten blank rows, the first one preset to `sample Long`.
    pub fn new() -> Self {
        let mut rows: Vec<ColumnSpec> = (1..=INITIAL_ROWS).map(ColumnSpec::blank).collect();
        if let Some(first) = rows.first_mut() {
            first.name = "sample".to_string();
            first.col_type = Some(ColumnType::Long);
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[ColumnSpec] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Adds a blank row numbered one past the current maximum.
    pub fn append(&mut self) -> u32 {
        let index = self.rows.iter().map(|r| r.index).max().unwrap_or(0) + 1;
        self.rows.push(ColumnSpec::blank(index));
        index
    }

    pub fn append_many(&mut self, count: usize) {
        for _ in 0..count {
            self.append();
        }
    }

    /// `position` is the row position in the table, not the `Col` index.
    pub fn set_name(&mut self, position: usize, name: &str) {
        if let Some(row) = self.rows.get_mut(position) {
            row.name = name.to_string();
        }
    }

    /// Empty text clears the type; unknown names are ignored.
    pub fn set_type(&mut self, position: usize, value: &str) {
        let Some(row) = self.rows.get_mut(position) else {
            return;
        };
        if value.is_empty() {
            row.col_type = None;
        } else if let Ok(col_type) = value.parse::<ColumnType>() {
            row.col_type = Some(col_type);
        }
    }

    /// Parses the width cell. Empty, non-numeric or zero input clears it.
    pub fn set_width(&mut self, position: usize, value: &str) {
        if let Some(row) = self.rows.get_mut(position) {
            row.width = value.trim().parse::<u32>().ok().filter(|w| *w >= 1);
        }
    }
}

/// Values of the options table, one slot per [`OptionKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTable {
    entries: Vec<OptionEntry>,
}

impl Default for OptionTable {
    fn default() -> Self {
        Self {
            entries: OptionKey::ALL
                .into_iter()
                .map(|key| OptionEntry::new(key, ""))
                .collect(),
        }
    }
}

impl OptionTable {
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn get(&self, key: OptionKey) -> &str {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, key: OptionKey, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value.to_string();
        }
    }
}

/// Full editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaForm {
    pub stem: String,
    pub extension: String,
    pub format: FormatChoice,
    /// Raw text of the delimiter input.
    pub delimiter_input: String,
    pub has_header: bool,
    pub scan_rows: bool,
    pub max_scan_rows: u32,
    pub columns: ColumnTable,
    pub options: OptionTable,
}

impl Default for SchemaForm {
    fn default() -> Self {
        Self {
            stem: "name".to_string(),
            extension: "csv".to_string(),
            format: FormatChoice::Comma,
            delimiter_input: String::new(),
            has_header: true,
            scan_rows: false,
            max_scan_rows: 0,
            columns: ColumnTable::new(),
            options: OptionTable::default(),
        }
    }
}

impl SchemaForm {
    pub fn filename(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }

    pub fn delimiter(&self) -> DelimiterInput {
        resolve_delimiter(&self.delimiter_input)
    }

    /// Type detection needs column names, so it is only honoured with a header.
    pub fn scan_mode(&self) -> ScanMode {
        if self.has_header && self.scan_rows {
            ScanMode::AutoDetect {
                max_scan_rows: self.max_scan_rows,
            }
        } else {
            ScanMode::Explicit
        }
    }

    pub fn to_descriptor(&self) -> SchemaDescriptor {
        SchemaDescriptor {
            filename: self.filename(),
            format: self.format.to_format(self.delimiter().delimiter),
            has_header: self.has_header,
            columns: self.columns.rows().to_vec(),
            options: self.options.entries().to_vec(),
            scan_mode: self.scan_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_seeded() {
        let table = ColumnTable::new();
        assert_eq!(table.len(), 10);
        assert_eq!(table.rows()[0].name, "sample");
        assert_eq!(table.rows()[0].col_type, Some(ColumnType::Long));
        let indices: Vec<u32> = table.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn append_continues_numbering() {
        let mut table = ColumnTable::new();
        assert_eq!(table.append(), 11);
        table.append_many(10);
        assert_eq!(table.len(), 21);
        assert_eq!(table.rows().last().map(|r| r.index), Some(21));
    }

    #[test]
    fn append_on_empty_table_starts_at_one() {
        let mut table = ColumnTable { rows: Vec::new() };
        assert_eq!(table.append(), 1);
    }

    #[test]
    fn cell_setters() {
        let mut table = ColumnTable::new();
        table.set_type(1, "Text");
        table.set_type(1, "Varchar");
        assert_eq!(table.rows()[1].col_type, Some(ColumnType::Text));
        table.set_type(1, "");
        assert_eq!(table.rows()[1].col_type, None);

        table.set_width(1, " 12 ");
        assert_eq!(table.rows()[1].width, Some(12));
        table.set_width(1, "0");
        assert_eq!(table.rows()[1].width, None);
        table.set_width(1, "abc");
        assert_eq!(table.rows()[1].width, None);

        table.set_name(99, "ignored");
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn quote_delimiter_is_replaced() {
        let resolved = resolve_delimiter("\"");
        assert_eq!(resolved.delimiter, Some(' '));
        assert_eq!(resolved.warning, Some(QUOTE_DELIMITER_WARNING));

        assert_eq!(resolve_delimiter("").delimiter, None);
        assert_eq!(resolve_delimiter(";x").delimiter, Some(';'));
    }

    #[test]
    fn scan_rows_needs_header() {
        let mut form = SchemaForm {
            scan_rows: true,
            max_scan_rows: 25,
            ..SchemaForm::default()
        };
        assert_eq!(form.scan_mode(), ScanMode::AutoDetect { max_scan_rows: 25 });
        form.has_header = false;
        assert_eq!(form.scan_mode(), ScanMode::Explicit);
    }

    #[test]
    fn default_form_descriptor() {
        let form = SchemaForm::default();
        let descriptor = form.to_descriptor();
        assert_eq!(descriptor.filename, "name.csv");
        assert_eq!(descriptor.format, FileFormat::CommaDelimited);
        assert!(descriptor.has_header);
        assert_eq!(descriptor.options.len(), OptionKey::ALL.len());
    }

    #[test]
    fn custom_format_carries_resolved_delimiter() {
        let form = SchemaForm {
            format: FormatChoice::Custom,
            delimiter_input: "\"".to_string(),
            ..SchemaForm::default()
        };
        assert_eq!(
            form.to_descriptor().format,
            FileFormat::CustomDelimited(Some(' '))
        );
    }

    #[test]
    fn option_table_set_and_get() {
        let mut options = OptionTable::default();
        options.set(OptionKey::DecimalSymbol, ",");
        assert_eq!(options.get(OptionKey::DecimalSymbol), ",");
        assert_eq!(options.get(OptionKey::CharacterSet), "");
    }
}
