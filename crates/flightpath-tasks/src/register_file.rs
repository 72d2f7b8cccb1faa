use async_trait::async_trait;
use flightpath_core::constants::DEFAULT_CONN_ID;
use flightpath_core::models::RegisterFileResponse;
use flightpath_core::Result;

use crate::task::{Task, TaskContext};

/// Registers a new version of a named-file.
#[derive(Debug, Clone)]
pub struct RegisterFileTask {
    pub project_name: String,
    pub name: String,
    pub file_location: String,
    pub template: Option<String>,
    pub conn_id: String,
}

impl RegisterFileTask {
    pub fn new(
        project_name: impl Into<String>,
        name: impl Into<String>,
        file_location: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            name: name.into(),
            file_location: file_location.into(),
            template: None,
            conn_id: DEFAULT_CONN_ID.to_string(),
        }
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }

    pub fn with_conn_id(mut self, conn_id: impl Into<String>) -> Self {
        self.conn_id = conn_id.into();
        self
    }
}

#[async_trait]
impl Task for RegisterFileTask {
    type Output = RegisterFileResponse;

    fn name(&self) -> &str {
        "register_file"
    }

    fn conn_id(&self) -> &str {
        &self.conn_id
    }

    async fn execute(&self, context: &TaskContext) -> Result<RegisterFileResponse> {
        let client = context.client(&self.conn_id)?;
        tracing::info!(
            "Registering file '{}' in project '{}' from location '{}'",
            self.name,
            self.project_name,
            self.file_location
        );

        let response = client
            .register_file(
                &self.project_name,
                &self.name,
                &self.file_location,
                self.template.as_deref(),
            )
            .await?;

        tracing::info!(
            "File registered successfully. Reference: {}",
            response.reference().as_deref().unwrap_or("<none>")
        );
        Ok(response)
    }
}
