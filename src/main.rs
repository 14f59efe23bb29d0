//! Bookrack - 图书目录浏览服务
//!
//! - Domain: pagination/, book 投影变换
//! - Application: queries, ports
//! - Infrastructure: http, persistence (MySQL), adapters (书评 API)

use std::sync::Arc;

use bookrack::config::{load_config, print_config};
use bookrack::infrastructure::adapters::{HttpReviewClient, HttpReviewClientConfig};
use bookrack::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bookrack::infrastructure::persistence::mysql::{
    create_pool, DatabaseConfig, MySqlBookRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},bookrack={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Bookrack - book catalog browser");
    print_config(&config);

    // 初始化数据库连接池（预填充的只读书库，不执行迁移）
    let db_config = DatabaseConfig::from_app_config(&config.database);
    let pool = create_pool(&db_config).await?;

    // 创建 Repository 适配器
    let book_repo = Arc::new(MySqlBookRepository::new(pool));

    // 创建书评 API 客户端
    let review_config = HttpReviewClientConfig::new(
        config.review.base_url.clone(),
        config.review.api_key.clone(),
    )
    .with_timeout(config.review.timeout_secs);
    let review_client = Arc::new(HttpReviewClient::new(review_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        &config.server.static_dir,
    );
    let state = AppState::new(book_repo, review_client);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
