use crate::render::RenderReport;
use serde::{Deserialize, Serialize};

/// Response body of `POST /api/schema/render`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub content: String,
    pub emitted_columns: usize,
    pub dropped_columns: Vec<u32>,
}

impl From<RenderReport> for RenderResponse {
    fn from(report: RenderReport) -> Self {
        Self {
            content: report.content,
            emitted_columns: report.emitted_columns,
            dropped_columns: report.dropped_columns,
        }
    }
}
