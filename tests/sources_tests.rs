// Source aggregation tests over a real station database

mod common;

use common::may_window;
use tempfile::TempDir;
use waterreport::mapping::{SourceSpec, TableKind, TableSpec};
use waterreport::sources::aggregate_source;
use waterreport::telemetry_store::SqliteStore;

const PUMP_SOURCE: SourceSpec = SourceSpec {
    name: "pump_stations",
    tables: &[
        TableSpec {
            name: "RWPH_ANALOG",
            kind: TableKind::Analog {
                channel_count: 2,
                totalizers: &["A2"],
            },
        },
        TableSpec {
            name: "RWPH_RUN_HR",
            kind: TableKind::RunHours {
                pumps: &["VTP_01", "VTP_02"],
            },
        },
    ],
};

async fn seeded_store(dir: &TempDir) -> SqliteStore {
    let path = dir.path().join("station.db");
    let store = SqliteStore::connect(path.to_str().unwrap(), 2)
        .await
        .unwrap();
    store.init(PUMP_SOURCE.tables).await.unwrap();

    // Carry-window sample (previous day) and two in-window samples
    for (date, time, a1, a2) in [
        ("2024-04-30", "22:00:00", 5.0, 880.5),
        ("2024-05-01", "08:00:00", 10.0, 895.0),
        ("2024-05-01", "20:00:00", 12.0, 910.0),
    ] {
        sqlx::query(
            "INSERT INTO RWPH_ANALOG (recorded_date, recorded_time, A1, A2)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(date)
        .bind(time)
        .bind(a1)
        .bind(a2)
        .execute(store.pool())
        .await
        .unwrap();
    }

    sqlx::query(
        "INSERT INTO RWPH_RUN_HR (recorded_date, pump_name, start_time, stop_time)
         VALUES ('2024-05-01', 'VTP_01', '08:00:00', '10:00:00')",
    )
    .execute(store.pool())
    .await
    .unwrap();

    store
}

#[tokio::test]
async fn aggregates_carry_and_run_hours_for_every_configured_table() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let result = aggregate_source(&store, &PUMP_SOURCE, &may_window())
        .await
        .unwrap();

    assert_eq!(result.source, "pump_stations");
    assert_eq!(result.tables.len(), 2);

    let analog = &result.tables["RWPH_ANALOG"];
    assert_eq!(analog.aggregates.len(), 2);
    assert_eq!(analog.aggregates[0].max, Some(12.0));
    assert_eq!(analog.aggregates[1].max, Some(910.0));

    // Carry covers totalizer channels only, over the previous window
    assert_eq!(analog.carry.len(), 1);
    assert_eq!(analog.carry[0].channel, "A2");
    assert_eq!(analog.carry[0].max, Some(880.5));

    let run = &result.tables["RWPH_RUN_HR"];
    assert_eq!(run.run_hours.len(), 2);
    assert_eq!(run.run_hours[0].pump_name, "VTP_01");
    assert_eq!(run.run_hours[0].duration_secs, 7200);
    assert_eq!(run.run_hours[1].duration_secs, 0);
}

#[tokio::test]
async fn empty_database_yields_an_empty_source_result() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("station.db");
    let store = SqliteStore::connect(path.to_str().unwrap(), 2)
        .await
        .unwrap();
    store.init(PUMP_SOURCE.tables).await.unwrap();

    let result = aggregate_source(&store, &PUMP_SOURCE, &may_window())
        .await
        .unwrap();

    assert!(result.is_empty());
    // Tables are still present, just without values
    assert_eq!(result.tables.len(), 2);
}

#[tokio::test]
async fn missing_table_fails_the_whole_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("station.db");
    let store = SqliteStore::connect(path.to_str().unwrap(), 2)
        .await
        .unwrap();
    // init deliberately skipped: no tables exist

    let err = aggregate_source(&store, &PUMP_SOURCE, &may_window()).await;
    assert!(err.is_err());
}
