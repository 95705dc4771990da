// Per-source aggregation snapshots: raw (optional fields) and resolved
// (defaults applied once, renderers never see absence).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CarryAggregate, ChannelAggregate, RunHourEntry, TotalizerDelta};

/// Reduction output for one table: channel aggregates, carry-window
/// aggregates for totalizer channels, and run-hour entries for activity
/// tables. Exactly one of `aggregates`/`run_hours` is populated per table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    pub aggregates: Vec<ChannelAggregate>,
    pub carry: Vec<CarryAggregate>,
    pub run_hours: Vec<RunHourEntry>,
}

impl TableResult {
    /// True when no channel produced a value and no pump had activity.
    pub fn is_empty(&self) -> bool {
        self.aggregates
            .iter()
            .all(|a| a.max.is_none() && a.min.is_none() && a.avg.is_none())
            && self.run_hours.iter().all(|r| r.duration_secs == 0)
    }
}

/// Immutable snapshot of one logical source for a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceResult {
    pub source: String,
    pub tables: BTreeMap<String, TableResult>,
}

impl SourceResult {
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(TableResult::is_empty)
    }
}

/// One channel after the aggregate-or-default pass: always concrete values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedChannel {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl ResolvedChannel {
    pub const ZERO: ResolvedChannel = ResolvedChannel {
        max: 0.0,
        min: 0.0,
        avg: 0.0,
    };
}

/// One table ready for rendering: no `Option` left anywhere.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTable {
    pub channels: BTreeMap<String, ResolvedChannel>,
    pub totalizers: Vec<TotalizerDelta>,
    pub run_hours: Vec<RunHourEntry>,
}

impl ResolvedTable {
    /// Channel stats, defaulting to all-zero for unknown channels.
    pub fn channel(&self, channel: &str) -> ResolvedChannel {
        self.channels
            .get(channel)
            .copied()
            .unwrap_or(ResolvedChannel::ZERO)
    }

    pub fn totalizer(&self, channel: &str) -> Option<&TotalizerDelta> {
        self.totalizers.iter().find(|t| t.channel == channel)
    }
}

/// A source after normalization, keyed by table name.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub source: String,
    pub tables: BTreeMap<String, ResolvedTable>,
}

impl ResolvedSource {
    /// Table lookup, defaulting to an empty table so renderers stay total.
    pub fn table(&self, name: &str) -> ResolvedTable {
        self.tables.get(name).cloned().unwrap_or_default()
    }
}
