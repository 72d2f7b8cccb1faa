//! Connection profiles
//!
//! A connection profile names a FlightPath Server instance: where it lives and
//! the API key sent with every request. Profiles are looked up by id through a
//! [`ConnectionStore`], so the client does not care whether they come from the
//! process environment or from an embedding orchestrator.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::constants::ENV_CONN_PREFIX;
use crate::error::{FlightPathError, Result};

/// Resolved base URL and API key for one connection id.
#[derive(Clone)]
pub struct ConnectionProfile {
    pub conn_id: String,
    pub base_url: String,
    pub api_key: String,
}

impl ConnectionProfile {
    /// Build a profile, rejecting a missing or blank URL or key.
    pub fn new(
        conn_id: impl Into<String>,
        base_url: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let conn_id = conn_id.into();

        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                FlightPathError::config(format!(
                    "FlightPath Server base URL not found in connection '{}'",
                    conn_id
                ))
            })?;

        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            FlightPathError::config(format!(
                "FlightPath Server API key not found in connection '{}'",
                conn_id
            ))
        })?;

        Ok(Self {
            conn_id,
            base_url,
            api_key,
        })
    }
}

// The API key never appears in logs or debug output.
impl fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("conn_id", &self.conn_id)
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

/// Source of connection profiles.
pub trait ConnectionStore: Send + Sync {
    /// Resolve the profile for `conn_id`, failing with a configuration error
    /// when it is unknown or incomplete.
    fn get_connection(&self, conn_id: &str) -> Result<ConnectionProfile>;
}

type VarLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads profiles from `FLIGHTPATH_CONN_<ID>_HOST` and `FLIGHTPATH_CONN_<ID>_API_KEY`.
#[derive(Clone)]
pub struct EnvConnectionStore {
    prefix: String,
    lookup: VarLookup,
}

impl Default for EnvConnectionStore {
    fn default() -> Self {
        Self::with_prefix(ENV_CONN_PREFIX)
    }
}

impl fmt::Debug for EnvConnectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConnectionStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl EnvConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom variable prefix instead of `FLIGHTPATH_CONN_`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            lookup: Arc::new(|name| std::env::var(name).ok()),
        }
    }

    /// Resolve variables through `lookup` instead of the process environment.
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.lookup = Arc::new(lookup);
        self
    }

    /// Environment variable holding `field` for `conn_id`.
    ///
    /// The id is upper-cased and every non-alphanumeric character becomes `_`,
    /// so `flightpath_server_default` maps to
    /// `FLIGHTPATH_CONN_FLIGHTPATH_SERVER_DEFAULT_HOST`.
    pub fn var_name(&self, conn_id: &str, field: &str) -> String {
        let id: String = conn_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}{}_{}", self.prefix, id, field)
    }

    fn read(&self, conn_id: &str, field: &str) -> Option<String> {
        (self.lookup)(&self.var_name(conn_id, field))
    }
}

impl ConnectionStore for EnvConnectionStore {
    fn get_connection(&self, conn_id: &str) -> Result<ConnectionProfile> {
        let host = self.read(conn_id, "HOST");
        let api_key = self.read(conn_id, "API_KEY");

        if host.is_none() && api_key.is_none() {
            return Err(FlightPathError::config(format!(
                "Connection '{}' is not defined (set {} and {})",
                conn_id,
                self.var_name(conn_id, "HOST"),
                self.var_name(conn_id, "API_KEY")
            )));
        }

        tracing::debug!(conn_id = %conn_id, "Resolved connection from environment");
        ConnectionProfile::new(conn_id, host, api_key)
    }
}

/// In-memory profiles keyed by connection id.
#[derive(Clone, Debug, Default)]
pub struct StaticConnectionStore {
    entries: HashMap<String, (Option<String>, Option<String>)>,
}

impl StaticConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection. Either field may be absent; completeness is
    /// checked when the profile is resolved.
    pub fn with_connection(
        mut self,
        conn_id: impl Into<String>,
        base_url: Option<&str>,
        api_key: Option<&str>,
    ) -> Self {
        self.entries.insert(
            conn_id.into(),
            (base_url.map(str::to_string), api_key.map(str::to_string)),
        );
        self
    }
}

impl ConnectionStore for StaticConnectionStore {
    fn get_connection(&self, conn_id: &str) -> Result<ConnectionProfile> {
        let (base_url, api_key) = self.entries.get(conn_id).cloned().ok_or_else(|| {
            FlightPathError::config(format!("Connection '{}' is not defined", conn_id))
        })?;
        ConnectionProfile::new(conn_id, base_url, api_key)
    }
}
