//! Task abstraction shared by the FlightPath wrappers.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use flightpath_api_client::ApiClient;
use flightpath_core::{ConnectionStore, EnvConnectionStore, Result};
use serde::Serialize;

/// Context provided to tasks during execution.
#[derive(Clone)]
pub struct TaskContext {
    /// Where connection ids are resolved to profiles.
    pub connections: Arc<dyn ConnectionStore>,
}

impl TaskContext {
    pub fn new(connections: Arc<dyn ConnectionStore>) -> Self {
        Self { connections }
    }

    /// Context backed by `FLIGHTPATH_CONN_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvConnectionStore::new()))
    }

    /// Build a client for `conn_id`. Fails before any request is sent when the
    /// profile is missing or incomplete.
    pub fn client(&self, conn_id: &str) -> Result<ApiClient> {
        ApiClient::from_connection(conn_id, self.connections.as_ref())
    }
}

/// A unit of work run by an orchestrator.
#[async_trait]
pub trait Task: Send + Sync + Debug {
    /// Value handed back to the orchestrator when the task succeeds.
    type Output: Serialize + Send;

    /// Task name/identifier
    fn name(&self) -> &str;

    /// Connection id the task resolves its client from.
    fn conn_id(&self) -> &str;

    async fn execute(&self, context: &TaskContext) -> Result<Self::Output>;
}
