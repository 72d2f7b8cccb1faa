//! Task wrappers for FlightPath Server.
//!
//! Each task builds an [`ApiClient`](flightpath_api_client::ApiClient) from
//! its connection id, makes one call and post-processes the result.

pub mod pull_data;
pub mod register_and_run;
pub mod register_file;
pub mod task;

pub use pull_data::PullDataTask;
pub use register_and_run::RegisterAndRunTask;
pub use register_file::RegisterFileTask;
pub use task::{Task, TaskContext};
