//! Shared types for Roster
//!
//! Data models and wire types used by roster-server, roster-client and
//! roster-console.

pub mod models;
pub mod patch;
pub mod response;

// Re-exports
pub use models::{Employee, EmployeeCreate, EmployeeUpdate, SalaryError, parse_salary};
pub use patch::Patch;
pub use response::{DeleteResponse, ErrorBody};
