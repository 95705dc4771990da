// The single aggregate-or-default pass: absent values become 0.0 and
// totalizer deltas are computed here, once per source, so renderers never
// handle absence themselves.

use std::collections::BTreeMap;

use tracing::warn;

use crate::mapping::SourceSpec;
use crate::models::{ResolvedChannel, ResolvedSource, ResolvedTable, SourceResult};
use crate::totalizer;

pub fn resolve_source(result: &SourceResult, spec: &SourceSpec) -> ResolvedSource {
    let mut tables = BTreeMap::new();

    for table_spec in spec.tables {
        let Some(table) = result.tables.get(table_spec.name) else {
            // Aggregation is fail-fast, so every configured table is present;
            // an empty default keeps rendering total regardless.
            tables.insert(table_spec.name.to_string(), ResolvedTable::default());
            continue;
        };

        let channels: BTreeMap<String, ResolvedChannel> = table
            .aggregates
            .iter()
            .map(|a| {
                (
                    a.channel.clone(),
                    ResolvedChannel {
                        max: a.max.unwrap_or(0.0),
                        min: a.min.unwrap_or(0.0),
                        avg: a.avg.unwrap_or(0.0),
                    },
                )
            })
            .collect();

        let totalizers = table_spec
            .totalizers()
            .iter()
            .map(|channel| {
                let final_max = table
                    .aggregates
                    .iter()
                    .find(|a| a.channel == *channel)
                    .and_then(|a| a.max);
                let carry_max = table
                    .carry
                    .iter()
                    .find(|c| c.channel == *channel)
                    .and_then(|c| c.max);
                let delta = totalizer::delta(channel, final_max, carry_max);
                if delta.cumulative < 0.0 {
                    warn!(
                        table = table_spec.name,
                        channel = *channel,
                        cumulative = delta.cumulative,
                        "negative cumulative flow; possible meter reset"
                    );
                }
                delta
            })
            .collect();

        tables.insert(
            table_spec.name.to_string(),
            ResolvedTable {
                channels,
                totalizers,
                run_hours: table.run_hours.clone(),
            },
        );
    }

    ResolvedSource {
        source: result.source.clone(),
        tables,
    }
}
