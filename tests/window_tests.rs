// Window resolution tests: cutover anchoring, idempotence, labels

mod common;

use common::{dt, six_am};
use waterreport::window::ReportWindow;

#[test]
fn resolve_after_cutover_ends_today() {
    let window = ReportWindow::resolve(dt("2024-05-02 06:05:00"), six_am());
    assert_eq!(window.start, dt("2024-05-01 06:00:00"));
    assert_eq!(window.end, dt("2024-05-02 06:00:00"));
}

#[test]
fn resolve_before_cutover_ends_yesterday() {
    let window = ReportWindow::resolve(dt("2024-05-02 05:59:59"), six_am());
    assert_eq!(window.start, dt("2024-04-30 06:00:00"));
    assert_eq!(window.end, dt("2024-05-01 06:00:00"));
}

#[test]
fn resolve_exactly_at_cutover_reports_closed_period() {
    let window = ReportWindow::resolve(dt("2024-05-02 06:00:00"), six_am());
    assert_eq!(window.start, dt("2024-05-01 06:00:00"));
    assert_eq!(window.end, dt("2024-05-02 06:00:00"));
}

#[test]
fn resolve_is_idempotent_within_a_period() {
    let cutover = six_am();
    let a = ReportWindow::resolve(dt("2024-05-02 06:00:00"), cutover);
    let b = ReportWindow::resolve(dt("2024-05-02 14:30:00"), cutover);
    let c = ReportWindow::resolve(dt("2024-05-03 05:59:59"), cutover);
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn carry_is_the_immediately_preceding_window() {
    let window = ReportWindow::resolve(dt("2024-05-02 07:00:00"), six_am());
    let carry = window.carry();
    assert_eq!(carry.start, dt("2024-04-30 06:00:00"));
    assert_eq!(carry.end, window.start);
}

#[test]
fn contains_is_half_open() {
    let window = common::may_window();
    assert!(window.contains(dt("2024-05-01 06:00:00")));
    assert!(window.contains(dt("2024-05-02 05:59:59")));
    assert!(!window.contains(dt("2024-05-02 06:00:00")));
    assert!(!window.contains(dt("2024-05-01 05:59:59")));
}

#[test]
fn labels_follow_the_start_day() {
    let window = common::may_window();
    assert_eq!(window.report_date(), "01-05-2024");
    assert_eq!(
        window.period_text(),
        "06:00 01-05-2024 TO 06:00 02-05-2024"
    );
    assert_eq!(window.artifact_key(), "2024-05-02");
}

#[test]
fn resolve_handles_non_default_cutover() {
    let noon = chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let window = ReportWindow::resolve(dt("2024-05-02 11:00:00"), noon);
    assert_eq!(window.start, dt("2024-04-30 12:00:00"));
    assert_eq!(window.end, dt("2024-05-01 12:00:00"));
}
