//! The aggregate handed to the formatter.
//!
//! A [`SchemaDescriptor`] is assembled by `common::form::SchemaForm` in the
//! browser, or deserialized from the JSON body of the backend endpoints, and
//! describes one `[file]` section of a `schema.ini`.

use crate::model::column::ColumnSpec;
use crate::model::file_format::FileFormat;
use crate::model::options::OptionEntry;
use serde::{Deserialize, Serialize};

/// How the driver learns the column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Columns come from the `Col<n>=` lines.
    Explicit,
    /// Types are guessed from the first `max_scan_rows` rows; 0 scans every row.
    AutoDetect { max_scan_rows: u32 },
}

/// Everything needed to render one `schema.ini` section.
///
/// Built fresh from the form on every render and never mutated afterwards.
/// This is also the JSON body accepted by the backend endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Data file name written in the section header, e.g. `data.csv`.
    pub filename: String,
    /// Layout of the data file, rendered on the `Format=` line.
    pub format: FileFormat,
    /// Whether the first line holds column names (`ColNameHeader=`).
    pub has_header: bool,
    /// Column rows as edited, including incomplete ones. Ignored in
    /// AutoDetect mode.
    pub columns: Vec<ColumnSpec>,
    /// Option rows; empty values are skipped. May be omitted in JSON.
    #[serde(default)]
    pub options: Vec<OptionEntry>,
    /// Explicit column lines or a `MaxScanRows=` line.
    pub scan_mode: ScanMode,
}
