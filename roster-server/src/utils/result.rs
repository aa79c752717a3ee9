//! Handler result alias

use crate::AppError;

/// Return type of every `/employees` handler; the error half renders as
/// `{"error": ...}` with the mapped status code
pub type AppResult<T> = Result<T, AppError>;
