// Source aggregation: one windowed reduction per table, all tables of a
// source fetched concurrently, fail-fast on any table error. Totalizer
// tables get an extra MAX-only pass over the carry window; activity
// tables go through the pure run-hour extraction below.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use futures_util::future::try_join_all;
use tracing::instrument;

use crate::mapping::{SourceSpec, TableKind, TableSpec};
use crate::models::{CarryAggregate, RunEvent, RunHourEntry, SourceResult, TableResult};
use crate::telemetry_store::TelemetryStore;
use crate::window::ReportWindow;

/// Reduces every table of one logical source over the report window.
/// A single table failure aborts the whole source (and with it the run);
/// downstream composition assumes every configured table is present.
#[instrument(skip(store, spec, window), fields(source = spec.name))]
pub async fn aggregate_source(
    store: &dyn TelemetryStore,
    spec: &SourceSpec,
    window: &ReportWindow,
) -> anyhow::Result<SourceResult> {
    let fetches = spec
        .tables
        .iter()
        .map(|table| aggregate_table(store, table, window));
    let tables: BTreeMap<String, TableResult> = try_join_all(fetches).await?.into_iter().collect();
    Ok(SourceResult {
        source: spec.name.to_string(),
        tables,
    })
}

async fn aggregate_table(
    store: &dyn TelemetryStore,
    spec: &TableSpec,
    window: &ReportWindow,
) -> anyhow::Result<(String, TableResult)> {
    let result = match spec.kind {
        TableKind::Analog { .. } => {
            let channels = spec.channels();
            let aggregates = store.reduce_window(spec.name, window, &channels).await?;

            let totalizers = spec.totalizers();
            let carry = if totalizers.is_empty() {
                Vec::new()
            } else {
                let carry_channels: Vec<String> =
                    totalizers.iter().map(|c| c.to_string()).collect();
                store
                    .reduce_window(spec.name, &window.carry(), &carry_channels)
                    .await?
                    .into_iter()
                    .map(|a| CarryAggregate {
                        channel: a.channel,
                        max: a.max,
                    })
                    .collect()
            };

            TableResult {
                aggregates,
                carry,
                run_hours: Vec::new(),
            }
        }
        TableKind::RunHours { pumps } => {
            let events = store.run_events(spec.name, window).await?;
            TableResult {
                aggregates: Vec::new(),
                carry: Vec::new(),
                run_hours: run_hours(&events, pumps, window),
            }
        }
    };
    Ok((spec.name.to_string(), result))
}

/// Reduces raw start/stop pairs to one entry per configured pump: events
/// whose stop falls in-window are clipped to the window, then per pump the
/// earliest clipped start, latest clipped stop, and the SUM of clipped
/// durations are kept. A pump may cycle several times in one window and
/// must report cumulative run time, not first-to-last span. Configured
/// pumps with no activity still appear with the zero-duration sentinel.
pub fn run_hours(
    events: &[RunEvent],
    pumps: &[&str],
    window: &ReportWindow,
) -> Vec<RunHourEntry> {
    struct Acc {
        start: NaiveDateTime,
        stop: NaiveDateTime,
        duration_secs: i64,
    }
    let mut by_pump: HashMap<&str, Acc> = HashMap::new();

    for event in events {
        if !window.contains(event.stop) {
            continue;
        }
        let start = event.start.max(window.start);
        let stop = event.stop.min(window.end);
        if stop < start {
            continue;
        }
        let duration = (stop - start).num_seconds();
        match by_pump.get_mut(event.pump_name.as_str()) {
            Some(acc) => {
                acc.start = acc.start.min(start);
                acc.stop = acc.stop.max(stop);
                acc.duration_secs += duration;
            }
            None => {
                by_pump.insert(
                    event.pump_name.as_str(),
                    Acc {
                        start,
                        stop,
                        duration_secs: duration,
                    },
                );
            }
        }
    }

    pumps
        .iter()
        .map(|pump| match by_pump.get(pump) {
            Some(acc) => RunHourEntry {
                pump_name: pump.to_string(),
                start: Some(acc.start),
                stop: Some(acc.stop),
                duration_secs: acc.duration_secs,
            },
            None => RunHourEntry::idle(pump),
        })
        .collect()
}
