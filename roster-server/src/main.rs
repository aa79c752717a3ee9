use roster_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "📇 Roster server starting..."
    );

    // 2. 初始化服务器状态 (打开数据库, 执行迁移)
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            return Err(e.into());
        }
    };

    // 3. 启动 HTTP 服务器, Ctrl-C 后优雅关闭
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    tracing::info!("Server stopped");
    Ok(())
}
