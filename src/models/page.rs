// Report pages: fixed-layout blocks produced by the section renderers.
// All values arrive pre-formatted (two decimals, HH:MM:SS); pages are
// immutable once rendered and composition only reorders them.

use serde::{Deserialize, Serialize};

/// Window labels shared by every page of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    /// Calendar day the report covers, `DD-MM-YYYY`.
    pub report_date: String,
    /// Human-readable window bounds, e.g. `06:00 01-05-2024 TO 06:00 02-05-2024`.
    pub period_text: String,
}

/// Statistics table: one header row of channel labels and three data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTable {
    pub columns: Vec<String>,
    pub max: Vec<String>,
    pub min: Vec<String>,
    pub avg: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalizerRow {
    pub name: String,
    pub initial: String,
    pub final_value: String,
    pub cumulative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalizerTable {
    pub rows: Vec<TotalizerRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHourRow {
    pub pump_name: String,
    pub start_time: String,
    pub stop_time: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHourTable {
    pub rows: Vec<RunHourRow>,
}

/// One laid-out region of a page, in top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Block {
    /// Red section caption, e.g. "RAW WATER PUMP HOUSE - FLOW TOTALIZERS".
    Caption { text: String },
    /// Single-row site info bar (ground level, pump set ratings, capacities).
    InfoBar { cells: Vec<String> },
    Stats { table: StatsTable },
    Totalizer { table: TotalizerTable },
    RunHours { table: RunHourTable },
}

/// One rendered page: title block labels plus layout blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page-specific subtitle, e.g. "RAW WATER PUMP HOUSE".
    pub title: String,
    pub report_date: String,
    pub period_text: String,
    pub blocks: Vec<Block>,
}

/// Output of one renderer, tagged with its section name for composition.
#[derive(Debug, Clone)]
pub struct SectionPages {
    pub section: String,
    pub pages: Vec<Page>,
}

/// The final ordered page sequence handed to delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDocument {
    pub pages: Vec<Page>,
}

impl ComposedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
