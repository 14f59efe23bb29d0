//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BOOKRACK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `BOOKRACK_SERVER__PORT=3000`
/// - `BOOKRACK_DATABASE__HOST=db.internal`
/// - `BOOKRACK_DATABASE__PASSWORD=secret`
/// - `BOOKRACK_REVIEW__API_KEY=xxxx`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.static_dir", "public")?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 3306)?
        .set_default("database.name", "goodreads")?
        .set_default("database.user", "root")?
        .set_default("database.password", "")?
        .set_default("database.pool_size", 4)?
        .set_default("database.timezone", "+08:00")?
        .set_default(
            "review.base_url",
            "https://api.nytimes.com/svc/books/v3/reviews.json",
        )?
        .set_default("review.api_key", "")?
        .set_default("review.timeout_secs", 10)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: BOOKRACK_，层级分隔符: __ (双下划线)
    // 例如: BOOKRACK_DATABASE__POOL_SIZE=8
    builder = builder.add_source(
        Environment::with_prefix("BOOKRACK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.pool_size == 0 {
        return Err(ConfigError::ValidationError(
            "Database pool size cannot be 0".to_string(),
        ));
    }

    if config.database.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database name cannot be empty".to_string(),
        ));
    }

    if config.review.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Review API base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不输出密码）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Static Directory: {:?}", config.server.static_dir);
    tracing::info!(
        "Database: mysql://{}@{}:{}/{}",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );
    tracing::info!("Database Pool Size: {}", config.database.pool_size);
    tracing::info!("Database Timezone: {}", config.database.timezone);
    tracing::info!("Review API: {}", config.review.base_url);
    tracing::info!(
        "Review API Key: {}",
        if config.review.api_key.is_empty() {
            "(unset)"
        } else {
            "(set)"
        }
    );
    tracing::info!("Review Timeout: {}s", config.review.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
