// Windowed reduction results: one aggregate per channel per table.
// Absent fields mean "no qualifying rows in the window", never an error.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// MAX/MIN/AVG for one channel over the report window.
/// All three are `None` when the table had zero in-window rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAggregate {
    pub channel: String,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub avg: Option<f64>,
}

/// MAX over the window immediately preceding the report window.
/// Computed only for totalizer channels; consumed only by the delta calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarryAggregate {
    pub channel: String,
    pub max: Option<f64>,
}

/// Consumption delta for a totalizer channel across the window boundary.
/// `cumulative` may be negative: a meter reset is passed through, not corrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalizerDelta {
    pub channel: String,
    pub initial: f64,
    #[serde(rename = "final")]
    pub final_value: f64,
    pub cumulative: f64,
}

/// One raw start/stop pair from a pump activity table.
#[derive(Debug, Clone, PartialEq)]
pub struct RunEvent {
    pub pump_name: String,
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
}

/// Per-pump run summary for the window: earliest clipped start, latest
/// clipped stop, and the sum of all clipped run durations. Pumps with no
/// in-window activity keep `None` times and zero duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHourEntry {
    pub pump_name: String,
    pub start: Option<NaiveDateTime>,
    pub stop: Option<NaiveDateTime>,
    pub duration_secs: i64,
}

impl RunHourEntry {
    pub fn idle(pump_name: &str) -> Self {
        Self {
            pump_name: pump_name.to_string(),
            start: None,
            stop: None,
            duration_secs: 0,
        }
    }
}
