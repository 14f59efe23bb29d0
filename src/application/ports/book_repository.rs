//! Book Repository Port - 出站端口
//!
//! 定义图书数据读取的抽象接口，具体实现在 infrastructure 层（MySQL / 内存）

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 图书完整记录（详情页）
///
/// authors/genres 为存储原样的 `|` 分隔字符串，投影变换在展现时进行
#[derive(Debug, Clone)]
pub struct BookRecord {
    pub book_id: i64,
    pub title: String,
    pub authors: String,
    pub genres: String,
    pub summary: String,
    pub pages: i64,
    pub rating: f64,
    pub rating_count: i64,
}

/// 图书摘要记录（列表页只取 id 和标题）
#[derive(Debug, Clone)]
pub struct BookSummaryRecord {
    pub book_id: i64,
    pub title: String,
}

/// Book Repository Port
///
/// 只读：本系统不对存储执行任何写操作
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 按标题前缀查询一页图书，按标题字典序排列
    async fn find_by_title_prefix(
        &self,
        prefix: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<BookSummaryRecord>, RepositoryError>;

    /// 统计标题前缀匹配的总数（与分页查询使用同一过滤条件）
    async fn count_by_title_prefix(&self, prefix: &str) -> Result<u64, RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, book_id: i64) -> Result<Option<BookRecord>, RepositoryError>;
}
