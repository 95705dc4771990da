// Report window resolution: one 24h half-open window anchored on the daily
// cutover instant. Resolving twice within the same period yields the same
// window, so a late trigger never drifts the report boundaries.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One reporting period, nominally 24 hours.
pub const PERIOD_HOURS: i64 = 24;

/// Half-open reporting interval `[start, end)`; `end` falls on the cutover
/// instant and `end - start` is exactly one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportWindow {
    /// Resolves the window for a run timestamp: `end` is the most recent
    /// occurrence of `cutover` at or before `now`; `start` is one period
    /// earlier. A run exactly at the cutover instant reports on the period
    /// that just closed.
    pub fn resolve(now: NaiveDateTime, cutover: NaiveTime) -> Self {
        let todays_cutover = now.date().and_time(cutover);
        let end = if now >= todays_cutover {
            todays_cutover
        } else {
            todays_cutover - Duration::hours(PERIOD_HOURS)
        };
        Self {
            start: end - Duration::hours(PERIOD_HOURS),
            end,
        }
    }

    /// The window immediately preceding this one, used to seed totalizer deltas.
    pub fn carry(&self) -> Self {
        Self {
            start: self.start - Duration::hours(PERIOD_HOURS),
            end: self.start,
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Calendar day the report covers (the start day), `DD-MM-YYYY`.
    pub fn report_date(&self) -> String {
        self.start.format("%d-%m-%Y").to_string()
    }

    /// Human-readable window bounds for the page headers.
    pub fn period_text(&self) -> String {
        format!(
            "{} TO {}",
            self.start.format("%H:%M %d-%m-%Y"),
            self.end.format("%H:%M %d-%m-%Y")
        )
    }

    /// Key for the persisted artifact: the end date, `YYYY-MM-DD`.
    pub fn artifact_key(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
