use dish_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    tracing::info!(
        database = %config.database_path,
        addr = %config.bind_addr(),
        "Dish server starting..."
    );

    // 2. 初始化服务器状态 (schema 失败只记录日志)
    let state = ServerState::initialize(&config).await;

    // 3. 启动 HTTP 服务器，Ctrl+C 退出
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
