//! Roster Server - 员工名册 HTTP 服务
//!
//! # 架构概述
//!
//! 单进程 JSON API，对外提供员工记录的增删改查：
//!
//! - **数据库** (`db`): SQLite 存储 (sqlx)，启动时自动迁移
//! - **HTTP API** (`api`): `/employees` RESTful 接口
//! - **路由** (`routes`): CORS、压缩、请求 ID、访问日志等中间件
//!
//! # 模块结构
//!
//! ```text
//! roster-server/src/
//! ├── core/          # 配置、状态、错误、服务器生命周期
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 中间件栈组装
//! ├── middleware/    # 访问日志
//! ├── utils/         # 错误映射、日志、校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 `.env` 并初始化日志
///
/// 必须在读取 [`Config`] 之前调用，`.env` 中的值才会生效。
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    // `.env` 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}
