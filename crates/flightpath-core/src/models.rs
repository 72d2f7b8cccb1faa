//! Request and response bodies for the FlightPath Server endpoints.
//!
//! Optional request fields are skipped when absent so they never reach the
//! server as `null`. Responses wrap whatever JSON the server sent, so task
//! wrappers hand back the full remote object and the accessors tolerate
//! unexpected shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_RUN_METHOD;

/// Treat empty strings the same as a missing value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Body for `POST /csvpath/register_file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterFileRequest {
    pub project_name: String,
    pub name: String,
    pub file_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl RegisterFileRequest {
    pub fn new(
        project_name: impl Into<String>,
        name: impl Into<String>,
        file_location: impl Into<String>,
        template: Option<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            name: name.into(),
            file_location: file_location.into(),
            template: non_empty(template),
        }
    }
}

/// Body for `POST /csvpath/register_and_run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterAndRunRequest {
    pub project_name: String,
    pub file_location: String,
    pub file_name: String,
    pub csvpaths_group_name: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_template: Option<String>,
}

impl RegisterAndRunRequest {
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
        }
    }

    /// Override the run method. An empty value keeps the default.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        let method = method.into();
        if !method.is_empty() {
            self.method = method;
        }
        self
    }

    pub fn file_template(mut self, template: Option<String>) -> Self {
        self.file_template = non_empty(template);
        self
    }

    pub fn run_template(mut self, template: Option<String>) -> Self {
        self.run_template = non_empty(template);
        self
    }
}

/// Body for `POST /find/find_files` and `POST /find/get_file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReferenceRequest {
    pub project_name: String,
    pub reference: String,
}

impl FileReferenceRequest {
    pub fn new(project_name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            reference: reference.into(),
        }
    }
}

/// Read `key` from a JSON object as text. Strings come back as-is, other
/// scalars in their JSON form; `null`, a missing key or a non-object body
/// give `None`.
fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Response of `POST /csvpath/register_file`. Any JSON the server returns is
/// kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterFileResponse(pub Value);

impl RegisterFileResponse {
    pub fn reference(&self) -> Option<String> {
        text_field(&self.0, "reference")
    }
}

/// Response of `POST /csvpath/register_and_run`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterAndRunResponse(pub Value);

impl RegisterAndRunResponse {
    pub fn register_reference(&self) -> Option<String> {
        text_field(&self.0, "register_reference")
    }

    pub fn run_reference(&self) -> Option<String> {
        text_field(&self.0, "run_reference")
    }
}

/// Response of `POST /find/find_files`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FindFilesResponse(pub Value);

impl FindFilesResponse {
    /// String entries of `paths`. A missing or `null` list is empty.
    pub fn paths(&self) -> Vec<String> {
        self.0
            .get("paths")
            .and_then(Value::as_array)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(|p| p.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Response of `POST /find/get_file`; `file` holds base64-encoded content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GetFileResponse(pub Value);

impl GetFileResponse {
    /// The encoded content, when present as a non-empty string.
    pub fn file(&self) -> Option<&str> {
        self.0
            .get("file")
            .and_then(Value::as_str)
            .filter(|f| !f.is_empty())
    }
}
