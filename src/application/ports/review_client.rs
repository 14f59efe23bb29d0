//! Review Client Port - 出站端口
//!
//! 定义第三方书评 API 的抽象接口，具体实现在 infrastructure/adapters

use async_trait::async_trait;
use thiserror::Error;

/// 书评查询错误
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Review service timeout")]
    Timeout,

    #[error("Review service network error: {0}")]
    NetworkError(String),

    #[error("Review service error: {0}")]
    ServiceError(String),

    #[error("Invalid review response: {0}")]
    InvalidResponse(String),
}

/// 单条书评记录
#[derive(Debug, Clone, Default)]
pub struct ReviewRecord {
    pub url: String,
    pub byline: String,
    pub book_title: String,
    pub book_author: String,
    pub summary: String,
    pub publication_dt: Option<String>,
}

/// 一次书评查询的结果
#[derive(Debug, Clone, Default)]
pub struct ReviewLookup {
    pub num_results: u32,
    pub copyright: String,
    pub reviews: Vec<ReviewRecord>,
}

/// Review Client Port
#[async_trait]
pub trait ReviewClientPort: Send + Sync {
    /// 按标题/作者查询书评
    async fn lookup(&self, title: &str, author: &str) -> Result<ReviewLookup, ReviewError>;
}
