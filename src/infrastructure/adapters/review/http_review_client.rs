//! HTTP Review Client - 调用第三方书评 API
//!
//! 实现 ReviewClientPort trait，通过 HTTP GET 调用书评服务
//!
//! 外部 API:
//! GET {base_url}?title=..&authors=..&api-key=..
//! Response: {"num_results": N, "copyright": "...", "results": [...]}  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{ReviewClientPort, ReviewError, ReviewLookup, ReviewRecord};

/// HTTP Review Client 配置
#[derive(Debug, Clone)]
pub struct HttpReviewClientConfig {
    /// 书评 API 基础 URL
    pub base_url: String,
    /// API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpReviewClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nytimes.com/svc/books/v3/reviews.json".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl HttpReviewClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 书评 API 响应（宽松解析，缺失字段取默认值）
#[derive(Debug, Deserialize)]
struct ReviewApiResponse {
    #[serde(default)]
    num_results: i64,
    #[serde(default)]
    copyright: String,
    #[serde(default)]
    results: Vec<ReviewApiRecord>,
}

#[derive(Debug, Deserialize)]
struct ReviewApiRecord {
    #[serde(default)]
    url: String,
    #[serde(default)]
    byline: String,
    #[serde(default)]
    book_title: String,
    #[serde(default)]
    book_author: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    publication_dt: Option<String>,
}

impl From<ReviewApiRecord> for ReviewRecord {
    fn from(r: ReviewApiRecord) -> Self {
        Self {
            url: r.url,
            byline: r.byline,
            book_title: r.book_title,
            book_author: r.book_author,
            summary: r.summary,
            publication_dt: r.publication_dt,
        }
    }
}

impl From<ReviewApiResponse> for ReviewLookup {
    fn from(r: ReviewApiResponse) -> Self {
        Self {
            num_results: r.num_results.max(0) as u32,
            copyright: r.copyright,
            reviews: r.results.into_iter().map(ReviewRecord::from).collect(),
        }
    }
}

/// HTTP Review Client
pub struct HttpReviewClient {
    client: Client,
    config: HttpReviewClientConfig,
}

impl HttpReviewClient {
    /// 创建新的 HTTP Review Client
    pub fn new(config: HttpReviewClientConfig) -> Result<Self, ReviewError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReviewError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ReviewClientPort for HttpReviewClient {
    async fn lookup(&self, title: &str, author: &str) -> Result<ReviewLookup, ReviewError> {
        tracing::debug!(
            url = %self.config.base_url,
            title = %title,
            author = %author,
            "Sending review lookup request"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("title", title),
                ("authors", author),
                ("api-key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReviewError::Timeout
                } else if e.is_connect() {
                    ReviewError::NetworkError(format!("Cannot connect to review service: {}", e))
                } else {
                    ReviewError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReviewError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ReviewApiResponse = response
            .json()
            .await
            .map_err(|e| ReviewError::InvalidResponse(e.to_string()))?;

        let lookup = ReviewLookup::from(body);

        tracing::info!(
            title = %title,
            author = %author,
            num_results = lookup.num_results,
            "Review lookup completed"
        );

        Ok(lookup)
    }
}
