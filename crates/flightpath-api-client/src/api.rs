//! Endpoint methods for the FlightPath Server API.

use flightpath_core::constants::endpoints;
use flightpath_core::models::{
    FileReferenceRequest, FindFilesResponse, GetFileResponse, RegisterAndRunRequest,
    RegisterAndRunResponse, RegisterFileRequest, RegisterFileResponse,
};
use flightpath_core::Result;

use crate::ApiClient;

impl ApiClient {
    /// Register a new version of a named-file.
    pub async fn register_file(
        &self,
        project_name: &str,
        name: &str,
        file_location: &str,
        template: Option<&str>,
    ) -> Result<RegisterFileResponse> {
        let body = RegisterFileRequest::new(
            project_name,
            name,
            file_location,
            template.map(str::to_string),
        );
        self.register_file_with(&body).await
    }

    pub async fn register_file_with(
        &self,
        body: &RegisterFileRequest,
    ) -> Result<RegisterFileResponse> {
        self.call(endpoints::REGISTER_FILE, body).await
    }

    /// Register a new version of a named-file, then run it through a
    /// named-paths group. `method` falls back to `collect_paths`.
    #[allow(clippy::too_many_arguments)]
    pub async fn register_and_run(
        &self,
        project_name: &str,
        file_location: &str,
        file_name: &str,
        csvpaths_group_name: &str,
        method: Option<&str>,
        file_template: Option<&str>,
        run_template: Option<&str>,
    ) -> Result<RegisterAndRunResponse> {
        let mut body =
            RegisterAndRunRequest::new(project_name, file_location, file_name, csvpaths_group_name)
                .file_template(file_template.map(str::to_string))
                .run_template(run_template.map(str::to_string));
        if let Some(m) = method {
            body = body.method(m);
        }
        self.register_and_run_with(&body).await
    }

    pub async fn register_and_run_with(
        &self,
        body: &RegisterAndRunRequest,
    ) -> Result<RegisterAndRunResponse> {
        self.call(endpoints::REGISTER_AND_RUN, body).await
    }

    /// Paths of the named-files a reference resolves to.
    pub async fn find_files(&self, project_name: &str, reference: &str) -> Result<FindFilesResponse> {
        let body = FileReferenceRequest::new(project_name, reference);
        self.call(endpoints::FIND_FILES, &body).await
    }

    /// Base64 content of the file a reference points to.
    pub async fn get_file(&self, project_name: &str, reference: &str) -> Result<GetFileResponse> {
        let body = FileReferenceRequest::new(project_name, reference);
        self.call(endpoints::GET_FILE, &body).await
    }
}
