//! Review Queries

/// 按标题/作者查询第三方书评
#[derive(Debug, Clone)]
pub struct GetBookReviews {
    pub title: String,
    pub author: String,
}
