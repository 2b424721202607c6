//! File layout written on the `Format=` line.
//!
//! The text driver understands four layouts: comma separated, tab separated,
//! fixed width, and separated by an arbitrary single character. The
//! [`FileFormat`] value travels inside the `SchemaDescriptor` posted by the
//! form and is rendered through its `Display` impl.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the text file described by a `schema.ini` section.
///
/// Each variant maps to the literal value of the `Format=` line. A custom
/// delimiter is carried as an optional character; `None` renders as a single
/// space, the same fallback the text driver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    CommaDelimited,
    TabDelimited,
    FixedLength,
    CustomDelimited(Option<char>),
}

impl FileFormat {
    /// Literal specifier written after `Format=`.
    pub fn specifier(&self) -> String {
        match self {
            FileFormat::CommaDelimited => "CSVDelimited".to_string(),
            FileFormat::TabDelimited => "TabDelimited".to_string(),
            FileFormat::FixedLength => "FixedLength".to_string(),
            FileFormat::CustomDelimited(delimiter) => {
                format!("Delimited({})", delimiter.unwrap_or(' '))
            }
        }
    }

    pub fn is_fixed_length(&self) -> bool {
        matches!(self, FileFormat::FixedLength)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specifier())
    }
}
