// Run-hour extraction tests: completeness, clipping, multi-cycle sums

mod common;

use common::{dt, may_window, run_event};
use waterreport::sources::run_hours;

const PUMPS: &[&str] = &["VTP_01", "VTP_02", "VTP_03"];

#[test]
fn every_configured_pump_appears_even_when_idle() {
    let entries = run_hours(&[], PUMPS, &may_window());
    assert_eq!(entries.len(), 3);
    for (entry, pump) in entries.iter().zip(PUMPS) {
        assert_eq!(entry.pump_name, *pump);
        assert_eq!(entry.start, None);
        assert_eq!(entry.stop, None);
        assert_eq!(entry.duration_secs, 0);
    }
}

#[test]
fn entries_follow_configured_pump_order_not_event_order() {
    let events = vec![
        run_event("VTP_03", "2024-05-01 10:00:00", "2024-05-01 11:00:00"),
        run_event("VTP_01", "2024-05-01 12:00:00", "2024-05-01 13:00:00"),
    ];
    let entries = run_hours(&events, PUMPS, &may_window());
    assert_eq!(entries[0].pump_name, "VTP_01");
    assert_eq!(entries[1].pump_name, "VTP_02");
    assert_eq!(entries[2].pump_name, "VTP_03");
    assert_eq!(entries[1].duration_secs, 0);
}

#[test]
fn multiple_cycles_sum_durations_and_span_first_start_last_stop() {
    let events = vec![
        run_event("VTP_01", "2024-05-01 08:00:00", "2024-05-01 10:00:00"),
        run_event("VTP_01", "2024-05-01 14:00:00", "2024-05-01 15:30:00"),
        run_event("VTP_01", "2024-05-01 20:00:00", "2024-05-01 20:30:00"),
    ];
    let entries = run_hours(&events, &["VTP_01"], &may_window());
    let entry = &entries[0];
    assert_eq!(entry.start, Some(dt("2024-05-01 08:00:00")));
    assert_eq!(entry.stop, Some(dt("2024-05-01 20:30:00")));
    // 2h + 1h30m + 30m, not the 12h30m first-to-last span
    assert_eq!(entry.duration_secs, 4 * 3600);
}

#[test]
fn event_straddling_window_start_is_clipped() {
    let events = vec![run_event(
        "VTP_01",
        "2024-05-01 05:00:00",
        "2024-05-01 07:00:00",
    )];
    let entries = run_hours(&events, &["VTP_01"], &may_window());
    assert_eq!(entries[0].start, Some(dt("2024-05-01 06:00:00")));
    assert_eq!(entries[0].stop, Some(dt("2024-05-01 07:00:00")));
    assert_eq!(entries[0].duration_secs, 3600);
}

#[test]
fn event_with_stop_outside_window_is_ignored() {
    let events = vec![
        run_event("VTP_01", "2024-05-01 03:00:00", "2024-05-01 05:00:00"),
        run_event("VTP_01", "2024-05-02 05:30:00", "2024-05-02 06:00:00"),
    ];
    let entries = run_hours(&events, &["VTP_01"], &may_window());
    assert_eq!(entries[0].duration_secs, 0);
    assert_eq!(entries[0].start, None);
}

#[test]
fn zero_length_event_counts_as_activity_with_zero_duration() {
    let events = vec![run_event(
        "VTP_01",
        "2024-05-01 09:00:00",
        "2024-05-01 09:00:00",
    )];
    let entries = run_hours(&events, &["VTP_01"], &may_window());
    assert_eq!(entries[0].start, Some(dt("2024-05-01 09:00:00")));
    assert_eq!(entries[0].duration_secs, 0);
}
