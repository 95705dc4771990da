// Background worker: run the report pipeline once a day at the cutover
// instant (cron expression, local time). The worker never retries a
// failed run; the next scheduled tick is the retry policy.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::pipeline::Pipeline;

/// Schedule config: the daily cutover instant (also the window boundary).
#[derive(Debug, Clone)]
pub struct ReportWorkerConfig {
    pub cutover_hour: u32,
    pub cutover_minute: u32,
}

/// Spawns the report worker. Returns a join handle.
pub fn spawn(
    pipeline: Arc<Pipeline>,
    config: ReportWorkerConfig,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        run(pipeline, config, shutdown_rx).await;
    })
}

async fn run(
    pipeline: Arc<Pipeline>,
    config: ReportWorkerConfig,
    mut shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) {
    let cron_expr = format!("0 {} {} * * *", config.cutover_minute, config.cutover_hour);
    let Ok(schedule) = cron::Schedule::from_str(&cron_expr) else {
        warn!(cron = %cron_expr, "invalid report schedule; daily report will not run");
        return;
    };
    info!(cron = %cron_expr, "daily report scheduled");

    loop {
        let now = chrono::Local::now();
        let Some(next) = schedule.after(&now).next() else {
            warn!("report schedule yielded no next occurrence");
            return;
        };
        let delay = (next - now).to_std().unwrap_or(Duration::from_secs(1));

        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                match pipeline.run().await {
                    Ok(summary) if summary.skipped => {
                        info!("scheduled report run skipped: no data");
                    }
                    Ok(summary) => {
                        info!(
                            report_date = summary.report_date.as_deref().unwrap_or(""),
                            "scheduled report run complete"
                        );
                    }
                    Err(e) => {
                        warn!(error = %e, "scheduled report run failed");
                    }
                }
            }
            _ = &mut shutdown_rx => {
                info!("report worker shutting down");
                return;
            }
        }
    }
}
