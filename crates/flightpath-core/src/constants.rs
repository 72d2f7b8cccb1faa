//! Fixed identifiers shared across the workspace.

/// Connection id used when a task does not name one.
pub const DEFAULT_CONN_ID: &str = "flightpath_server_default";

/// Connection type registered with the orchestrator.
pub const CONN_TYPE: &str = "flightpath_server";

/// Human-readable service name.
pub const SERVICE_NAME: &str = "FlightPath Server";

/// Run method used by register-and-run when none is given.
pub const DEFAULT_RUN_METHOD: &str = "collect_paths";

/// Prefix for environment-backed connection profiles.
pub const ENV_CONN_PREFIX: &str = "FLIGHTPATH_CONN_";

pub mod endpoints {
    pub const REGISTER_FILE: &str = "/csvpath/register_file";
    pub const REGISTER_AND_RUN: &str = "/csvpath/register_and_run";
    pub const FIND_FILES: &str = "/find/find_files";
    pub const GET_FILE: &str = "/find/get_file";
}
