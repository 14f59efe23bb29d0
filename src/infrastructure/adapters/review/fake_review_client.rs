//! Fake Review Client - 用于测试的书评客户端
//!
//! 返回固定结果或固定错误，不发起网络请求

use async_trait::async_trait;

use crate::application::ports::{ReviewClientPort, ReviewError, ReviewLookup, ReviewRecord};

enum Mode {
    Ok(ReviewLookup),
    Failing,
    TimingOut,
}

/// Fake Review Client
pub struct FakeReviewClient {
    mode: Mode,
}

impl FakeReviewClient {
    /// 返回给定书评列表（num_results 取列表长度）
    pub fn with_reviews(reviews: Vec<ReviewRecord>) -> Self {
        Self {
            mode: Mode::Ok(ReviewLookup {
                num_results: reviews.len() as u32,
                copyright: "Copyright (c) Test".to_string(),
                reviews,
            }),
        }
    }

    /// 返回空结果
    pub fn empty() -> Self {
        Self::with_reviews(Vec::new())
    }

    /// 始终返回网络错误
    pub fn failing() -> Self {
        Self { mode: Mode::Failing }
    }

    /// 始终返回超时
    pub fn timing_out() -> Self {
        Self {
            mode: Mode::TimingOut,
        }
    }
}

#[async_trait]
impl ReviewClientPort for FakeReviewClient {
    async fn lookup(&self, _title: &str, _author: &str) -> Result<ReviewLookup, ReviewError> {
        match &self.mode {
            Mode::Ok(lookup) => Ok(lookup.clone()),
            Mode::Failing => Err(ReviewError::NetworkError("fake network failure".to_string())),
            Mode::TimingOut => Err(ReviewError::Timeout),
        }
    }
}
