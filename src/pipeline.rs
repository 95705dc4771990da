// Pipeline orchestrator: window resolution, concurrent source
// aggregation, normalization, rendering, composition, delivery. A run
// either produces one complete document, is skipped (no telemetry at
// all), or fails with no partial delivery. Retries belong to the
// scheduler, never to the orchestrator.

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::{info, instrument};

use crate::compose::{self, SpliceRule};
use crate::delivery::{ReportArtifact, ReportDelivery};
use crate::mapping;
use crate::models::{ReportMeta, RunSummary, SectionPages, SourceResult};
use crate::render;
use crate::resolve::resolve_source;
use crate::sources::aggregate_source;
use crate::telemetry_store::TelemetryStore;
use crate::window::ReportWindow;

/// Fatal run outcomes. A skipped run is a summary, not an error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("data access failure: {0}")]
    DataAccess(#[source] anyhow::Error),
    #[error("render failure: {0}")]
    Render(String),
    #[error("delivery failure: {0}")]
    Delivery(#[source] anyhow::Error),
}

/// Run progression, logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    WindowResolved,
    Aggregating,
    Rendering,
    Composed,
    Delivered,
    Skipped,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One explicitly passed data-access handle per station database.
pub struct StationStores {
    pub pump_stations: Arc<dyn TelemetryStore>,
    pub storage_sites: Arc<dyn TelemetryStore>,
    pub transmission: Arc<dyn TelemetryStore>,
}

pub struct Pipeline {
    stores: StationStores,
    delivery: Arc<dyn ReportDelivery>,
    cutover: NaiveTime,
    splice: SpliceRule,
    // One report run at a time; a manual trigger racing the scheduled run
    // waits instead of producing a duplicate document.
    run_lock: tokio::sync::Mutex<()>,
}

impl Pipeline {
    pub fn new(
        stores: StationStores,
        delivery: Arc<dyn ReportDelivery>,
        cutover: NaiveTime,
        splice: SpliceRule,
    ) -> Self {
        Self {
            stores,
            delivery,
            cutover,
            splice,
            run_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Runs the pipeline for the current local time.
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        self.run_at(Local::now().naive_local()).await
    }

    /// Runs the pipeline for an explicit run timestamp. Two calls within
    /// the same reporting period resolve the same window and therefore
    /// produce the same report.
    #[instrument(skip(self), fields(run_at = %now))]
    pub async fn run_at(&self, now: NaiveDateTime) -> Result<RunSummary, PipelineError> {
        let _running = self.run_lock.lock().await;
        let mut state = RunState::Idle;

        let window = ReportWindow::resolve(now, self.cutover);
        state = transition(state, RunState::WindowResolved, &window);

        state = transition(state, RunState::Aggregating, &window);
        let (pump_stations, storage_sites, transmission) = futures_util::try_join!(
            aggregate_source(&*self.stores.pump_stations, &mapping::PUMP_STATIONS, &window),
            aggregate_source(&*self.stores.storage_sites, &mapping::STORAGE_SITES, &window),
            aggregate_source(&*self.stores.transmission, &mapping::TRANSMISSION, &window),
        )
        .map_err(PipelineError::DataAccess)?;

        if pump_stations.is_empty() && storage_sites.is_empty() && transmission.is_empty() {
            transition(state, RunState::Skipped, &window);
            info!("no data found for any source; skipping report");
            return Ok(RunSummary::skipped());
        }

        state = transition(state, RunState::Rendering, &window);
        let meta = ReportMeta {
            report_date: window.report_date(),
            period_text: window.period_text(),
        };
        let sections = vec![
            section(&pump_stations, &mapping::PUMP_STATIONS, &meta, render::pump_stations),
            section(&storage_sites, &mapping::STORAGE_SITES, &meta, render::storage_sites),
            section(&transmission, &mapping::TRANSMISSION, &meta, render::transmission),
        ];
        for s in &sections {
            if s.pages.is_empty() {
                return Err(PipelineError::Render(format!(
                    "section {} produced no pages",
                    s.section
                )));
            }
        }

        let document = compose::compose(sections, &self.splice);
        state = transition(state, RunState::Composed, &window);
        info!(pages = document.page_count(), "document composed");

        let artifact = ReportArtifact {
            key: window.artifact_key(),
            report_date: meta.report_date.clone(),
            period_text: meta.period_text.clone(),
            bytes: render::document::encode(&document),
        };
        self.delivery
            .deliver(&artifact)
            .await
            .map_err(PipelineError::Delivery)?;
        transition(state, RunState::Delivered, &window);

        Ok(RunSummary::produced(
            window,
            vec![pump_stations, storage_sites, transmission],
        ))
    }
}

fn section(
    result: &SourceResult,
    spec: &mapping::SourceSpec,
    meta: &ReportMeta,
    render: impl Fn(&crate::models::ResolvedSource, &ReportMeta) -> Vec<crate::models::Page>,
) -> SectionPages {
    SectionPages {
        section: spec.name.to_string(),
        pages: render(&resolve_source(result, spec), meta),
    }
}

fn transition(from: RunState, to: RunState, window: &ReportWindow) -> RunState {
    tracing::debug!(%from, %to, start = %window.start, end = %window.end, "pipeline state");
    to
}
