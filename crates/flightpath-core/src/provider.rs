//! Provider metadata advertised to orchestrators that discover integrations.

use serde::Serialize;

use crate::constants::{CONN_TYPE, SERVICE_NAME};

pub const PACKAGE_NAME: &str = "flightpath-server-client";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConnectionTypeInfo {
    pub connection_type: String,
    pub client_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderInfo {
    pub package_name: String,
    pub name: String,
    pub description: String,
    pub connection_types: Vec<ConnectionTypeInfo>,
    pub versions: Vec<String>,
}

pub fn provider_info() -> ProviderInfo {
    ProviderInfo {
        package_name: PACKAGE_NAME.to_string(),
        name: SERVICE_NAME.to_string(),
        description: format!("A workflow integration for {}.", SERVICE_NAME),
        connection_types: vec![ConnectionTypeInfo {
            connection_type: CONN_TYPE.to_string(),
            client_name: "flightpath_api_client::ApiClient".to_string(),
        }],
        versions: vec![env!("CARGO_PKG_VERSION").to_string()],
    }
}
