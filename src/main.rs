use anyhow::Result;
use chrono::NaiveTime;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use waterreport::*;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    let pump_stations = Arc::new(
        telemetry_store::SqliteStore::connect(
            &app_config.database.pump_stations_path,
            app_config.database.max_pool_size,
        )
        .await?,
    );
    pump_stations.init(mapping::PUMP_STATIONS.tables).await?;

    let storage_sites = Arc::new(
        telemetry_store::SqliteStore::connect(
            &app_config.database.storage_sites_path,
            app_config.database.max_pool_size,
        )
        .await?,
    );
    storage_sites.init(mapping::STORAGE_SITES.tables).await?;

    let transmission = Arc::new(
        telemetry_store::SqliteStore::connect(
            &app_config.database.transmission_path,
            app_config.database.max_pool_size,
        )
        .await?,
    );
    transmission.init(mapping::TRANSMISSION.tables).await?;

    let cutover = NaiveTime::from_hms_opt(
        app_config.report.cutover_hour,
        app_config.report.cutover_minute,
        0,
    )
    .ok_or_else(|| anyhow::anyhow!("invalid report cutover time"))?;

    let delivery = Arc::new(delivery::FileDelivery::new(&app_config.report.output_dir));

    let pipeline = Arc::new(pipeline::Pipeline::new(
        pipeline::StationStores {
            pump_stations,
            storage_sites,
            transmission,
        },
        delivery,
        cutover,
        compose::SpliceRule {
            section: app_config.report.splice_section.clone(),
            position: app_config.report.splice_position,
        },
    ));

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let worker_handle = if app_config.report.enable_schedule {
        Some(report_worker::spawn(
            pipeline.clone(),
            report_worker::ReportWorkerConfig {
                cutover_hour: app_config.report.cutover_hour,
                cutover_minute: app_config.report.cutover_minute,
            },
            shutdown_rx,
        ))
    } else {
        None
    };

    let app = routes::app(pipeline);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                tokio::signal::ctrl_c().await
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            if let Some(handle) = worker_handle {
                let _ = handle.await;
            }
        }
    }

    Ok(())
}
