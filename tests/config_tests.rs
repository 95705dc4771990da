// Config loading and validation tests

use waterreport::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[database]
pump_stations_path = "data/pump_stations.db"
storage_sites_path = "data/storage_sites.db"
transmission_path = "data/transmission.db"
max_pool_size = 5

[report]
cutover_hour = 6
cutover_minute = 0
output_dir = "data/reports"
splice_section = "transmission"
splice_position = 2
enable_schedule = true
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.database.pump_stations_path, "data/pump_stations.db");
    assert_eq!(config.database.max_pool_size, 5);
    assert_eq!(config.report.cutover_hour, 6);
    assert_eq!(config.report.output_dir, "data/reports");
    assert_eq!(config.report.splice_position, 2);
    assert!(config.report.enable_schedule);
}

#[test]
fn test_config_defaults_apply_when_report_keys_omitted() {
    let minimal = r#"
[server]
port = 8081
host = "0.0.0.0"

[database]
pump_stations_path = "data/pump_stations.db"
storage_sites_path = "data/storage_sites.db"
transmission_path = "data/transmission.db"
max_pool_size = 5

[report]
output_dir = "data/reports"
"#;
    let config = AppConfig::load_from_str(minimal).expect("load_from_str");
    assert_eq!(config.report.cutover_hour, 6);
    assert_eq!(config.report.cutover_minute, 0);
    assert_eq!(config.report.splice_section, "transmission");
    assert_eq!(config.report.splice_position, 2);
    assert!(config.report.enable_schedule);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_db_path() {
    let bad = VALID_CONFIG.replace(
        "storage_sites_path = \"data/storage_sites.db\"",
        "storage_sites_path = \"\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("storage_sites_path"));
}

#[test]
fn test_config_validation_rejects_max_pool_size_zero() {
    let bad = VALID_CONFIG.replace("max_pool_size = 5", "max_pool_size = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_pool_size"));
}

#[test]
fn test_config_validation_rejects_out_of_range_cutover() {
    let bad = VALID_CONFIG.replace("cutover_hour = 6", "cutover_hour = 24");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("cutover_hour"));

    let bad = VALID_CONFIG.replace("cutover_minute = 0", "cutover_minute = 60");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("cutover_minute"));
}

#[test]
fn test_config_validation_rejects_unknown_splice_section() {
    let bad = VALID_CONFIG.replace(
        "splice_section = \"transmission\"",
        "splice_section = \"booster_stations\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("splice_section"));
}

#[test]
fn test_config_validation_rejects_empty_output_dir() {
    let bad = VALID_CONFIG.replace("output_dir = \"data/reports\"", "output_dir = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("output_dir"));
}
