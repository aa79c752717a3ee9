use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动与运行期错误 (请求级错误见 [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储初始化失败: {0}")]
    Storage(#[from] AppError),

    #[error("监听地址无效: {0}")]
    InvalidAddress(String),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
