use serde::Deserialize;

use crate::mapping;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// One SQLite file per station database; the stations are physically
/// separate systems and never share a pool.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub pump_stations_path: String,
    pub storage_sites_path: String,
    pub transmission_path: String,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Daily window boundary and schedule instant, local time.
    #[serde(default = "default_cutover_hour")]
    pub cutover_hour: u32,
    #[serde(default)]
    pub cutover_minute: u32,
    /// Where delivered report artifacts are persisted.
    pub output_dir: String,
    /// Section whose pages are spliced into the composed document.
    #[serde(default = "default_splice_section")]
    pub splice_section: String,
    /// Absolute 0-based page index the spliced section lands at.
    #[serde(default = "default_splice_position")]
    pub splice_position: usize,
    /// Run the daily schedule (disable for one-shot/manual deployments).
    #[serde(default = "default_enable_schedule")]
    pub enable_schedule: bool,
}

fn default_cutover_hour() -> u32 {
    6
}

fn default_splice_section() -> String {
    mapping::TRANSMISSION_SECTION.to_string()
}

fn default_splice_position() -> usize {
    2
}

fn default_enable_schedule() -> bool {
    true
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.pump_stations_path.is_empty(),
            "database.pump_stations_path must be non-empty"
        );
        anyhow::ensure!(
            !self.database.storage_sites_path.is_empty(),
            "database.storage_sites_path must be non-empty"
        );
        anyhow::ensure!(
            !self.database.transmission_path.is_empty(),
            "database.transmission_path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        anyhow::ensure!(
            self.report.cutover_hour < 24,
            "report.cutover_hour must be 0-23, got {}",
            self.report.cutover_hour
        );
        anyhow::ensure!(
            self.report.cutover_minute < 60,
            "report.cutover_minute must be 0-59, got {}",
            self.report.cutover_minute
        );
        anyhow::ensure!(
            !self.report.output_dir.is_empty(),
            "report.output_dir must be non-empty"
        );
        anyhow::ensure!(
            mapping::ALL_SOURCES
                .iter()
                .any(|s| s.name == self.report.splice_section),
            "report.splice_section must name a configured section, got {}",
            self.report.splice_section
        );
        Ok(())
    }
}
