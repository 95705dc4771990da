// Shared test helpers

use chrono::{NaiveDateTime, NaiveTime};
use waterreport::models::{ChannelAggregate, RunEvent};
use waterreport::window::ReportWindow;

#[allow(dead_code)]
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[allow(dead_code)]
pub fn six_am() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).unwrap()
}

/// Window [2024-05-01 06:00, 2024-05-02 06:00), used throughout.
#[allow(dead_code)]
pub fn may_window() -> ReportWindow {
    ReportWindow {
        start: dt("2024-05-01 06:00:00"),
        end: dt("2024-05-02 06:00:00"),
    }
}

#[allow(dead_code)]
pub fn agg(channel: &str, max: f64, min: f64, avg: f64) -> ChannelAggregate {
    ChannelAggregate {
        channel: channel.to_string(),
        max: Some(max),
        min: Some(min),
        avg: Some(avg),
    }
}

#[allow(dead_code)]
pub fn empty_agg(channel: &str) -> ChannelAggregate {
    ChannelAggregate {
        channel: channel.to_string(),
        max: None,
        min: None,
        avg: None,
    }
}

#[allow(dead_code)]
pub fn run_event(pump: &str, start: &str, stop: &str) -> RunEvent {
    RunEvent {
        pump_name: pump.to_string(),
        start: dt(start),
        stop: dt(stop),
    }
}
