//! 统一错误处理
//!
//! HTTP 层错误类型 [`AppError`]，所有错误响应统一为:
//!
//! ```json
//! { "error": "<message>" }
//! ```
//!
//! # 状态码映射
//!
//! | 变体 | 状态码 | 说明 |
//! |------|--------|------|
//! | Validation | 400 | 必填字段缺失或为空 |
//! | Conflict | 400 | 唯一约束冲突 (email) |
//! | Invalid | 400 | 请求体无法解析 |
//! | Rejected | 400 | 写操作被存储层拒绝 |
//! | NotFound | 404 | 员工或路由不存在 |
//! | MethodNotAllowed | 405 | 路由存在但方法不支持 |
//! | Database | 500 | 读/删除时存储错误 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use shared::response::MSG_EMPLOYEE_NOT_FOUND;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 客户端错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Resource already exists: {0}")]
    /// 唯一约束冲突 (400)
    Conflict(String),

    #[error("Invalid request: {0}")]
    /// 无效请求体 (400)
    Invalid(String),

    #[error("Write rejected: {0}")]
    /// 写操作失败 (400)
    Rejected(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Method not allowed: {0}")]
    /// 方法不支持 (405)
    MethodNotAllowed(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// The unknown-employee error, also used for ids that are not integers
    pub fn employee_not_found() -> Self {
        Self::NotFound(MSG_EMPLOYEE_NOT_FOUND.to_string())
    }

    /// Known path, unsupported method
    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed("Method not allowed".to_string())
    }

    /// Map a store error raised by create/update.
    ///
    /// Any storage failure on the write path is a 400, not a 500.
    pub fn from_write(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => Self::Rejected(msg),
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::Conflict(_)
            | AppError::Invalid(_)
            | AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::Invalid(msg)
            | AppError::Rejected(msg)
            | AppError::NotFound(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::Database(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
            }
            AppError::Rejected(msg) => {
                error!(target: "database", error = %msg, "Write rejected by storage");
            }
            _ => {}
        }

        (status, Json(ErrorBody::new(self.message()))).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Invalid(e.body_text())
    }
}
