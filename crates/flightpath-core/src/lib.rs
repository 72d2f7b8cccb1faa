//! FlightPath Core Library
//!
//! This crate provides the request/response models, error types and connection
//! profile resolution shared by the FlightPath Server API client, the task
//! wrappers and the CLI.

pub mod connection;
pub mod constants;
pub mod error;
pub mod models;
pub mod provider;

// Re-export commonly used types
pub use connection::{ConnectionProfile, ConnectionStore, EnvConnectionStore, StaticConnectionStore};
pub use error::{FlightPathError, Result};
pub use provider::{provider_info, ConnectionTypeInfo, ProviderInfo};
