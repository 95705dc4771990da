// Section renderers: pure functions from resolved aggregates to page
// sequences. Each section is self-contained; the composer decides the
// final page order. Layout (tags, labels, site info) is fixed per the
// client's daily report sheet.

mod pump_stations;
mod storage_sites;
mod transmission;

pub mod document;

pub use pump_stations::render as pump_stations;
pub use storage_sites::render as storage_sites;
pub use transmission::render as transmission;

use crate::models::{
    Block, Page, ReportMeta, ResolvedTable, RunHourEntry, RunHourRow, RunHourTable, StatsTable,
    TotalizerRow, TotalizerTable,
};

/// Fixed title block printed at the top of every page.
pub const TITLE_BLOCK: [&str; 3] = [
    "WATER SUPPLY IMPROVEMENT SCHEME TO EXPANDED",
    "COIMBATORE CORPORATION INCLUDING NEWLY MERGED AREAS WITH",
    "RIVER BHAVANI AS SOURCE PILLUR-3",
];

/// Branding assets referenced by the page header; loading the bytes is the
/// static-asset collaborator's concern.
pub const HEADER_ASSETS: [&str; 2] = ["TWDA_Logo.png", "meillogo.png"];

/// One statistics-table column: channel tag plus display label and unit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TagSpec {
    pub tag: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
}

/// One totalizer-table row: display title plus the backing channel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalizerSpec {
    pub title: &'static str,
    pub tag: &'static str,
}

pub(crate) fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}

fn column_label(tag: &TagSpec) -> String {
    if tag.unit.is_empty() {
        tag.label.to_string()
    } else {
        format!("{} {}", tag.label, tag.unit)
    }
}

/// MAX/MIN/AVG rows over the given tags, two decimals, absent channels 0.00.
pub(crate) fn stats_table(tags: &[TagSpec], table: &ResolvedTable) -> StatsTable {
    let mut columns = Vec::with_capacity(tags.len());
    let mut max = Vec::with_capacity(tags.len());
    let mut min = Vec::with_capacity(tags.len());
    let mut avg = Vec::with_capacity(tags.len());
    for tag in tags {
        let channel = table.channel(tag.tag);
        columns.push(column_label(tag));
        max.push(fmt2(channel.max));
        min.push(fmt2(channel.min));
        avg.push(fmt2(channel.avg));
    }
    StatsTable {
        columns,
        max,
        min,
        avg,
    }
}

/// One row per totalizer channel; a channel with no computed delta renders
/// all-zero rather than being dropped.
pub(crate) fn totalizer_table(rows: &[TotalizerSpec], table: &ResolvedTable) -> TotalizerTable {
    let rows = rows
        .iter()
        .map(|spec| {
            let (initial, final_value, cumulative) = match table.totalizer(spec.tag) {
                Some(delta) => (delta.initial, delta.final_value, delta.cumulative),
                None => (0.0, 0.0, 0.0),
            };
            TotalizerRow {
                name: spec.title.to_string(),
                initial: fmt2(initial),
                final_value: fmt2(final_value),
                cumulative: fmt2(cumulative),
            }
        })
        .collect();
    TotalizerTable { rows }
}

fn fmt_duration(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Rows in configured pump order; idle pumps render 00:00:00 throughout.
pub(crate) fn run_hour_table(entries: &[RunHourEntry]) -> RunHourTable {
    let rows = entries
        .iter()
        .map(|entry| RunHourRow {
            pump_name: entry.pump_name.clone(),
            start_time: entry
                .start
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "00:00:00".to_string()),
            stop_time: entry
                .stop
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "00:00:00".to_string()),
            duration: fmt_duration(entry.duration_secs),
        })
        .collect();
    RunHourTable { rows }
}

pub(crate) fn page(title: &str, meta: &ReportMeta, blocks: Vec<Block>) -> Page {
    Page {
        title: title.to_string(),
        report_date: meta.report_date.clone(),
        period_text: meta.period_text.clone(),
        blocks,
    }
}
