// Integration tests: HTTP endpoints over real station databases

use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveTime;
use tempfile::TempDir;
use waterreport::compose::SpliceRule;
use waterreport::delivery::FileDelivery;
use waterreport::mapping;
use waterreport::pipeline::{Pipeline, StationStores};
use waterreport::routes;
use waterreport::telemetry_store::SqliteStore;

async fn test_server() -> (TempDir, TestServer) {
    let dir = TempDir::new().unwrap();

    let mut stores = Vec::new();
    for (file, spec) in [
        ("pump_stations.db", &mapping::PUMP_STATIONS),
        ("storage_sites.db", &mapping::STORAGE_SITES),
        ("transmission.db", &mapping::TRANSMISSION),
    ] {
        let path = dir.path().join(file);
        let store = SqliteStore::connect(path.to_str().unwrap(), 2)
            .await
            .unwrap();
        store.init(spec.tables).await.unwrap();
        stores.push(Arc::new(store));
    }
    let mut stores = stores.into_iter();
    let pump_stations = stores.next().unwrap();
    let storage_sites = stores.next().unwrap();
    let transmission = stores.next().unwrap();

    let pipeline = Arc::new(Pipeline::new(
        StationStores {
            pump_stations,
            storage_sites,
            transmission,
        },
        Arc::new(FileDelivery::new(dir.path().join("reports"))),
        NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        SpliceRule {
            section: mapping::TRANSMISSION_SECTION.to_string(),
            position: 2,
        },
    ));

    let server = TestServer::new(routes::app(pipeline));
    (dir, server)
}

#[tokio::test]
async fn test_root_endpoint() {
    let (_dir, server) = test_server().await;
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("Daily water report service");
}

#[tokio::test]
async fn test_version_endpoint() {
    let (_dir, server) = test_server().await;
    let response = server.get("/version").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "waterreport");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_manual_run_on_empty_databases_reports_skipped() {
    let (_dir, server) = test_server().await;
    let response = server.post("/api/report/run").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["skipped"], true);
    assert!(body.get("window").is_none());
}

#[tokio::test]
async fn test_manual_run_with_data_returns_summary_and_writes_artifact() {
    let (dir, server) = test_server().await;

    // Seed one transmission sample one hour into the window the run will
    // resolve for the current local time
    let window = waterreport::window::ReportWindow::resolve(
        chrono::Local::now().naive_local(),
        NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    );
    let sample_at = window.start + chrono::Duration::hours(1);

    let path = dir.path().join("transmission.db");
    let store = SqliteStore::connect(path.to_str().unwrap(), 1)
        .await
        .unwrap();
    sqlx::query("INSERT INTO TRANSMISSION_LINE (recorded_date, recorded_time, A1) VALUES ($1, $2, 4.2)")
        .bind(sample_at.format("%Y-%m-%d").to_string())
        .bind(sample_at.format("%H:%M:%S").to_string())
        .execute(store.pool())
        .await
        .unwrap();

    let response = server.post("/api/report/run").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["skipped"], false);
    assert!(body["reportDate"].is_string());
    assert!(body["window"]["start"].is_string());

    let artifact = dir.path().join("reports").join(format!(
        "combined_water_report_{}.txt",
        window.artifact_key()
    ));
    assert!(artifact.exists());
    let text = std::fs::read_to_string(artifact).unwrap();
    // Two pump pages, then the spliced transmission page at position 2
    assert_eq!(text.matches('\u{0c}').count(), 6);
}
