//! Column definitions for the `Col<n>=` lines.
//!
//! A [`ColumnSpec`] is one row of the column editor in the frontend. Rows are
//! sent as typed in, including half-filled ones; `common::render` decides
//! which rows qualify through [`ColumnSpec::is_complete`].

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Microsoft Jet data types accepted in a `Col<n>=` line.
///
/// The ODBC aliases (`Char`, `Float`, `Integer`, `LongChar`, `Date`) are not
/// offered; the Jet names cover the same storage types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Bit,
    Byte,
    Short,
    Long,
    Currency,
    Single,
    Double,
    DateTime,
    Text,
    Memo,
}

impl ColumnType {
    /// Every type, in the order the column editor lists them.
    pub const ALL: [ColumnType; 10] = [
        ColumnType::Bit,
        ColumnType::Byte,
        ColumnType::Short,
        ColumnType::Long,
        ColumnType::Currency,
        ColumnType::Single,
        ColumnType::Double,
        ColumnType::DateTime,
        ColumnType::Text,
        ColumnType::Memo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Bit => "Bit",
            ColumnType::Byte => "Byte",
            ColumnType::Short => "Short",
            ColumnType::Long => "Long",
            ColumnType::Currency => "Currency",
            ColumnType::Single => "Single",
            ColumnType::Double => "Double",
            ColumnType::DateTime => "DateTime",
            ColumnType::Text => "Text",
            ColumnType::Memo => "Memo",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownColumnType(s.to_string()))
    }
}

/// One row of the column table.
///
/// `index` is the 1-based number written after `Col`. Rows are kept even when
/// incomplete; the formatter decides which ones make it into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// The `<n>` of `Col<n>=`. Assigned by the column table when the row is
    /// added and never rewritten, so gaps survive filtering.
    pub index: u32,
    /// Column name as it appears in the data file header. Empty until typed.
    pub name: String,
    /// Jet data type picked in the select box. `None` while nothing is chosen.
    pub col_type: Option<ColumnType>,
    /// Character width. Mandatory for fixed-length files, printed as
    /// ` width <n>` whenever it is at least 1.
    pub width: Option<u32>,
}

impl ColumnSpec {
    pub fn new(index: u32, name: impl Into<String>, col_type: ColumnType) -> Self {
        Self {
            index,
            name: name.into(),
            col_type: Some(col_type),
            width: None,
        }
    }

    /// A blank row, as added by the "+1" button.
    pub fn blank(index: u32) -> Self {
        Self {
            index,
            name: String::new(),
            col_type: None,
            width: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Width when it is usable, i.e. at least 1.
    pub fn effective_width(&self) -> Option<u32> {
        self.width.filter(|w| *w >= 1)
    }

    /// Whether the row qualifies for a `Col<n>=` line.
    pub fn is_complete(&self, fixed_length: bool) -> bool {
        !self.name.is_empty()
            && self.col_type.is_some()
            && (!fixed_length || self.effective_width().is_some())
    }

    /// True when no cell of the row was filled in.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.col_type.is_none() && self.effective_width().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_names() {
        assert_eq!("DateTime".parse::<ColumnType>(), Ok(ColumnType::DateTime));
        assert_eq!(
            "Integer".parse::<ColumnType>(),
            Err(SchemaError::UnknownColumnType("Integer".to_string()))
        );
    }

    #[test]
    fn fixed_length_requires_positive_width() {
        let col = ColumnSpec::new(1, "id", ColumnType::Long);
        assert!(col.is_complete(false));
        assert!(!col.is_complete(true));
        assert!(!col.clone().with_width(0).is_complete(true));
        assert!(col.with_width(4).is_complete(true));
    }

    #[test]
    fn blank_row_detection_ignores_zero_width() {
        assert!(ColumnSpec::blank(3).is_blank());
        assert!(ColumnSpec::blank(3).with_width(0).is_blank());
        assert!(!ColumnSpec::blank(3).with_width(2).is_blank());
    }
}
