// SQLite station database. Analog tables hold one row per sample with
// DATE/TIME split across two text columns (legacy SCADA layout); the
// window filter recombines them into one instant.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::instrument;

use super::TelemetryStore;
use crate::mapping::{TableKind, TableSpec};
use crate::models::{ChannelAggregate, RunEvent};
use crate::window::ReportWindow;

const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    /// Creates the configured tables if a station database is empty (fresh
    /// deployments and tests; the SCADA historian normally owns the schema).
    pub async fn init(&self, tables: &[TableSpec]) -> anyhow::Result<()> {
        for spec in tables {
            match spec.kind {
                TableKind::Analog { .. } => {
                    let cols = spec
                        .channels()
                        .iter()
                        .map(|c| format!("{c} REAL"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    sqlx::query(&format!(
                        "CREATE TABLE IF NOT EXISTS {} (
                            id INTEGER PRIMARY KEY AUTOINCREMENT,
                            recorded_date TEXT NOT NULL,
                            recorded_time TEXT NOT NULL,
                            {cols}
                        )",
                        spec.name
                    ))
                    .execute(&self.pool)
                    .await?;
                    sqlx::query(&format!(
                        "CREATE INDEX IF NOT EXISTS idx_{0}_recorded ON {0}(recorded_date, recorded_time)",
                        spec.name
                    ))
                    .execute(&self.pool)
                    .await?;
                }
                TableKind::RunHours { .. } => {
                    sqlx::query(&format!(
                        "CREATE TABLE IF NOT EXISTS {} (
                            id INTEGER PRIMARY KEY AUTOINCREMENT,
                            recorded_date TEXT NOT NULL,
                            pump_name TEXT NOT NULL,
                            start_time TEXT NOT NULL,
                            stop_time TEXT NOT NULL
                        )",
                        spec.name
                    ))
                    .execute(&self.pool)
                    .await?;
                    sqlx::query(&format!(
                        "CREATE INDEX IF NOT EXISTS idx_{0}_recorded ON {0}(recorded_date, pump_name)",
                        spec.name
                    ))
                    .execute(&self.pool)
                    .await?;
                }
            }
        }
        Ok(())
    }

    /// Pool handle for test seeding and maintenance tooling.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TelemetryStore for SqliteStore {
    #[instrument(
        skip(self, window, channels),
        fields(store = "sqlite", operation = "reduce_window", table = table)
    )]
    async fn reduce_window(
        &self,
        table: &str,
        window: &ReportWindow,
        channels: &[String],
    ) -> anyhow::Result<Vec<ChannelAggregate>> {
        let select = channels
            .iter()
            .map(|c| format!("MAX({c}), MIN({c}), AVG({c})"))
            .collect::<Vec<_>>()
            .join(", ");
        // Table and channel names come from the static catalog, never from
        // request input.
        let sql = format!(
            "SELECT {select} FROM {table}
             WHERE datetime(recorded_date || ' ' || recorded_time) >= datetime($1)
               AND datetime(recorded_date || ' ' || recorded_time) < datetime($2)"
        );
        let row = sqlx::query(&sql)
            .bind(window.start.format(INSTANT_FORMAT).to_string())
            .bind(window.end.format(INSTANT_FORMAT).to_string())
            .fetch_one(&self.pool)
            .await?;

        let mut out = Vec::with_capacity(channels.len());
        for (i, channel) in channels.iter().enumerate() {
            out.push(ChannelAggregate {
                channel: channel.clone(),
                max: row.try_get::<Option<f64>, _>(i * 3)?,
                min: row.try_get::<Option<f64>, _>(i * 3 + 1)?,
                avg: row.try_get::<Option<f64>, _>(i * 3 + 2)?,
            });
        }
        Ok(out)
    }

    #[instrument(
        skip(self, window),
        fields(store = "sqlite", operation = "run_events", table = table)
    )]
    async fn run_events(
        &self,
        table: &str,
        window: &ReportWindow,
    ) -> anyhow::Result<Vec<RunEvent>> {
        let sql = format!(
            "SELECT recorded_date, pump_name, start_time, stop_time FROM {table}
             WHERE datetime(recorded_date || ' ' || stop_time) >= datetime($1)
               AND datetime(recorded_date || ' ' || stop_time) < datetime($2)
             ORDER BY recorded_date ASC, start_time ASC"
        );
        let rows = sqlx::query(&sql)
            .bind(window.start.format(INSTANT_FORMAT).to_string())
            .bind(window.end.format(INSTANT_FORMAT).to_string())
            .fetch_all(&self.pool)
            .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let date: String = row.try_get("recorded_date")?;
            let pump_name: String = row.try_get("pump_name")?;
            let start: String = row.try_get("start_time")?;
            let stop: String = row.try_get("stop_time")?;
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
            out.push(RunEvent {
                pump_name,
                start: date.and_time(NaiveTime::parse_from_str(&start, "%H:%M:%S")?),
                stop: date.and_time(NaiveTime::parse_from_str(&stop, "%H:%M:%S")?),
            });
        }
        Ok(out)
    }
}
