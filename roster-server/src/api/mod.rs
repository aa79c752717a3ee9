//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工管理接口 (`/employees`)

pub mod employees;

// Re-export common types for handlers
pub use crate::utils::AppResult;
