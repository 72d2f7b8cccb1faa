use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use flightpath_core::constants::DEFAULT_CONN_ID;
use flightpath_core::models::GetFileResponse;
use flightpath_core::{FlightPathError, Result};

use crate::task::{Task, TaskContext};

/// Pulls a result file from a past run and saves it locally.
#[derive(Debug, Clone)]
pub struct PullDataTask {
    pub project_name: String,
    pub reference: String,
    pub output_path: PathBuf,
    pub conn_id: String,
}

impl PullDataTask {
    pub fn new(
        project_name: impl Into<String>,
        reference: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            reference: reference.into(),
            output_path: output_path.into(),
            conn_id: DEFAULT_CONN_ID.to_string(),
        }
    }

    pub fn with_conn_id(mut self, conn_id: impl Into<String>) -> Self {
        self.conn_id = conn_id.into();
        self
    }
}

/// Decode the `file` field of a get-file response. Empty or missing content
/// is an error. Whitespace, such as line wrapping, is ignored.
pub fn decode_file_content(response: &GetFileResponse) -> Result<Vec<u8>> {
    let encoded = response
        .file()
        .ok_or_else(FlightPathError::no_file_content)?;

    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact)
        .map_err(|e| FlightPathError::Decode(e.to_string()))
}

async fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    tokio::fs::write(path, content).await?;
    Ok(())
}

#[async_trait]
impl Task for PullDataTask {
    type Output = PathBuf;

    fn name(&self) -> &str {
        "pull_data"
    }

    fn conn_id(&self) -> &str {
        &self.conn_id
    }

    async fn execute(&self, context: &TaskContext) -> Result<PathBuf> {
        let client = context.client(&self.conn_id)?;
        tracing::info!(
            "Attempting to pull data for reference '{}' from project '{}'",
            self.reference,
            self.project_name
        );

        let response = client.get_file(&self.project_name, &self.reference).await?;
        let content = decode_file_content(&response)?;
        tracing::debug!(bytes = content.len(), "Decoded file content");

        write_output(&self.output_path, &content).await?;
        tracing::info!(
            "File content successfully saved to {}",
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }
}
