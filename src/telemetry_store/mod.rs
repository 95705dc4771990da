// Data-access capability for station telemetry. The core talks to this
// trait only; each storage backend implements it once and the pipeline
// never branches on backend identity.

mod sqlite;

use crate::models::{ChannelAggregate, RunEvent};
use crate::window::ReportWindow;
use async_trait::async_trait;

pub use sqlite::SqliteStore;

#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Reduce rows whose combined date+time instant falls in `[window.start,
    /// window.end)` to MAX/MIN/AVG per named channel. A table with zero
    /// qualifying rows yields aggregates with all fields `None`, not an error.
    async fn reduce_window(
        &self,
        table: &str,
        window: &ReportWindow,
        channels: &[String],
    ) -> anyhow::Result<Vec<ChannelAggregate>>;

    /// Raw start/stop pairs per pump whose stop instant falls in-window.
    async fn run_events(
        &self,
        table: &str,
        window: &ReportWindow,
    ) -> anyhow::Result<Vec<RunEvent>>;
}
