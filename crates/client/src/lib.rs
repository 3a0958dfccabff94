//! Native client for the society management API.
//!
//! Library half of the `society` command-line tool: configuration, session
//! persistence, the authenticated HTTP client and the resident importer.

pub mod api;
pub mod commands;
pub mod error;
pub mod shared;
pub mod system;
pub mod usecases;

pub use api::ApiClient;
pub use error::{ApiError, ClientError, ClientResult};
