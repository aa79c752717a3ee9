//! Roster Client - HTTP client for the Roster Server
//!
//! Typed wrappers over the `/employees` API. Error responses are decoded
//! from `{"error": ...}` and surfaced with the server's message intact.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{DeleteResponse, Employee, EmployeeCreate, EmployeeUpdate, Patch};
