use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 持有配置与存储的共享引用
///
/// `DbService` 内部是连接池，Clone 只复制句柄。
/// 请求之间除数据库外不共享任何可变状态。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let employees = employee::find_all(state.pool()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工存储 (SQLite)
    pub db: DbService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；
    /// 测试中配合 `DbService::in_memory()` 使用
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态：打开数据库并执行迁移
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 获取连接池
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// 关闭存储 (进程退出前调用)
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
