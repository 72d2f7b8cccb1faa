//! HTTP client for the FlightPath Server API.
//!
//! Wraps one call primitive (`call`: POST JSON, parse JSON) and the four
//! endpoint methods built on it (register, register-and-run, find, get).
//! Task wrappers and the CLI use this client directly.

pub mod api;

use flightpath_core::{ConnectionProfile, ConnectionStore, FlightPathError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Header carrying the API key on every request.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// HTTP client for one FlightPath Server connection.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    profile: ConnectionProfile,
    access_token: HeaderValue,
}

impl ApiClient {
    /// Fails with a configuration error when the API key cannot be sent as a
    /// header value.
    pub fn new(profile: ConnectionProfile) -> Result<Self> {
        let mut access_token = HeaderValue::from_str(&profile.api_key).map_err(|_| {
            FlightPathError::config(format!(
                "API key for connection '{}' is not a valid header value",
                profile.conn_id
            ))
        })?;
        access_token.set_sensitive(true);

        let client = Client::builder()
            .build()
            .map_err(|e| FlightPathError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            profile,
            access_token,
        })
    }

    /// Resolve `conn_id` through `store` and build a client for it.
    pub fn from_connection(conn_id: &str, store: &dyn ConnectionStore) -> Result<Self> {
        let profile = store.get_connection(conn_id)?;
        Self::new(profile)
    }

    pub fn base_url(&self) -> &str {
        &self.profile.base_url
    }

    pub fn conn_id(&self) -> &str {
        &self.profile.conn_id
    }

    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.profile.base_url, endpoint)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, self.access_token.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// POST `body` as JSON to `endpoint` and deserialize the JSON response.
    ///
    /// Transport failures and non-2xx statuses become `ApiCall`; a body that
    /// is not JSON becomes `InvalidResponse` carrying the raw text. The body is
    /// parsed as JSON before it is converted to `T`.
    pub async fn call<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(endpoint);
        tracing::info!("Calling FlightPath Server API: POST {}", url);

        let payload = serde_json::to_string(body).map_err(|e| {
            FlightPathError::ApiCall(format!("failed to serialize request body: {}", e))
        })?;

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .body(payload)
            .send()
            .await
            .map_err(|e| FlightPathError::ApiCall(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FlightPathError::ApiCall(e.to_string()))?;

        if !status.is_success() {
            return Err(FlightPathError::ApiCall(format!(
                "POST {} returned HTTP status {}: {}",
                url, status, text
            )));
        }

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| FlightPathError::InvalidResponse {
                reason: e.to_string(),
                body: text.clone(),
            })?;

        serde_json::from_value(value).map_err(|e| FlightPathError::InvalidResponse {
            reason: format!("unexpected response shape: {}", e),
            body: text,
        })
    }
}

// Re-export domain types for convenience.
pub use flightpath_core::models::{
    FileReferenceRequest, FindFilesResponse, GetFileResponse, RegisterAndRunRequest,
    RegisterAndRunResponse, RegisterFileRequest, RegisterFileResponse,
};
