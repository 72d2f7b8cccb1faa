//! Error types module
//!
//! All failures surfaced by the client and task wrappers are unified under
//! `FlightPathError`. Transport/status failures (`ApiCall`) and unparsable
//! bodies (`InvalidResponse`) together make up the client error reported for
//! any failed remote call.

use std::io;

use crate::constants::SERVICE_NAME;

pub type Result<T> = std::result::Result<T, FlightPathError>;

#[derive(Debug, thiserror::Error)]
pub enum FlightPathError {
    /// Connection profile missing or incomplete. Raised when the client is built.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("FlightPath Server API call failed: {0}")]
    ApiCall(String),

    #[error("Failed to decode JSON response from FlightPath Server: {reason}, Response: {body}")]
    InvalidResponse { reason: String, body: String },

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Invalid file content: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FlightPathError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_data(message: impl Into<String>) -> Self {
        Self::MissingData(message.into())
    }

    /// A get-file response carried no content.
    pub fn no_file_content() -> Self {
        Self::MissingData(format!("No file content received from {}.", SERVICE_NAME))
    }

    /// True for errors raised by a remote call, whether the request itself
    /// failed or the response could not be parsed.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiCall(_) | Self::InvalidResponse { .. })
    }

    /// Stable machine-readable code, used in CLI output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::ApiCall(_) => "API_CALL_FAILED",
            Self::InvalidResponse { .. } => "INVALID_RESPONSE",
            Self::MissingData(_) => "MISSING_DATA",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}
