// Delivery collaborator: receives the composed artifact plus window
// labels. Transport (email or otherwise) and its retries live behind this
// trait, outside the pipeline core. FileDelivery persists the artifact
// keyed by the window's end date, the only state the report keeps.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::info;

/// The composed document plus the labels a transport needs for subject
/// lines and file names.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    /// Window end date, `YYYY-MM-DD`; the persistence key.
    pub key: String,
    pub report_date: String,
    pub period_text: String,
    pub bytes: Bytes,
}

#[async_trait]
pub trait ReportDelivery: Send + Sync {
    async fn deliver(&self, artifact: &ReportArtifact) -> anyhow::Result<()>;
}

pub struct FileDelivery {
    output_dir: PathBuf,
}

impl FileDelivery {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl ReportDelivery for FileDelivery {
    async fn deliver(&self, artifact: &ReportArtifact) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self
            .output_dir
            .join(format!("combined_water_report_{}.txt", artifact.key));
        tokio::fs::write(&path, &artifact.bytes).await?;
        info!(
            path = %path.display(),
            report_date = %artifact.report_date,
            bytes = artifact.bytes.len(),
            "combined report written"
        );
        Ok(())
    }
}
