// Structured run summary returned to the scheduler and the manual-trigger API.

use serde::{Deserialize, Serialize};

use super::SourceResult;
use crate::window::ReportWindow;

/// Outcome of one pipeline run. `skipped: true` carries no other fields;
/// a produced report carries the window labels and per-source snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<ReportWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceResult>>,
}

impl RunSummary {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            report_date: None,
            period_text: None,
            window: None,
            sources: None,
        }
    }

    pub fn produced(window: ReportWindow, sources: Vec<SourceResult>) -> Self {
        Self {
            skipped: false,
            report_date: Some(window.report_date()),
            period_text: Some(window.period_text()),
            window: Some(window),
            sources: Some(sources),
        }
    }
}
