use async_trait::async_trait;
use flightpath_core::constants::{DEFAULT_CONN_ID, DEFAULT_RUN_METHOD};
use flightpath_core::models::{RegisterAndRunRequest, RegisterAndRunResponse};
use flightpath_core::Result;

use crate::task::{Task, TaskContext};

/// Registers a new version of a named-file and runs it through a named-paths
/// group in one call.
#[derive(Debug, Clone)]
pub struct RegisterAndRunTask {
    pub project_name: String,
    pub file_location: String,
    pub file_name: String,
    pub csvpaths_group_name: String,
    pub method: String,
    pub file_template: Option<String>,
    pub run_template: Option<String>,
    pub conn_id: String,
}

impl RegisterAndRunTask {
    pub fn new(
        project_name: impl Into<String>,
        file_location: impl Into<String>,
        file_name: impl Into<String>,
        csvpaths_group_name: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            file_location: file_location.into(),
            file_name: file_name.into(),
            csvpaths_group_name: csvpaths_group_name.into(),
            method: DEFAULT_RUN_METHOD.to_string(),
            file_template: None,
            run_template: None,
            conn_id: DEFAULT_CONN_ID.to_string(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_file_template(mut self, template: Option<String>) -> Self {
        self.file_template = template;
        self
    }

    pub fn with_run_template(mut self, template: Option<String>) -> Self {
        self.run_template = template;
        self
    }

    pub fn with_conn_id(mut self, conn_id: impl Into<String>) -> Self {
        self.conn_id = conn_id.into();
        self
    }

    fn request(&self) -> RegisterAndRunRequest {
        RegisterAndRunRequest::new(
            &self.project_name,
            &self.file_location,
            &self.file_name,
            &self.csvpaths_group_name,
        )
        .method(&self.method)
        .file_template(self.file_template.clone())
        .run_template(self.run_template.clone())
    }
}

#[async_trait]
impl Task for RegisterAndRunTask {
    type Output = RegisterAndRunResponse;

    fn name(&self) -> &str {
        "register_and_run"
    }

    fn conn_id(&self) -> &str {
        &self.conn_id
    }

    async fn execute(&self, context: &TaskContext) -> Result<RegisterAndRunResponse> {
        let client = context.client(&self.conn_id)?;
        tracing::info!(
            "Registering and running file '{}' from location '{}' with csvpaths group '{}'",
            self.file_name,
            self.file_location,
            self.csvpaths_group_name
        );

        let response = client.register_and_run_with(&self.request()).await?;

        tracing::info!(
            "File registered and run successfully. Register Reference: {}, Run Reference: {}",
            response.register_reference().as_deref().unwrap_or("<none>"),
            response.run_reference().as_deref().unwrap_or("<none>")
        );
        Ok(response)
    }
}
