//! MySQL Book Repository
//!
//! 预期表结构（预填充，只读）：
//!
//! ```sql
//! CREATE TABLE books (
//!     book_id      BIGINT PRIMARY KEY,
//!     title        VARCHAR(512) NOT NULL,
//!     authors      TEXT NOT NULL,          -- `|` 分隔
//!     genres       TEXT NOT NULL,          -- `|` 分隔
//!     summary      TEXT NOT NULL,
//!     pages        BIGINT NOT NULL,
//!     rating       DOUBLE NOT NULL,
//!     rating_count BIGINT NOT NULL
//! );
//! ```
//!
//! 前缀匹配的大小写敏感性由列的排序规则决定（MySQL 默认排序规则不区分大小写）

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    BookRecord, BookRepositoryPort, BookSummaryRecord, RepositoryError,
};

const SQL_BOOKS_BY_PREFIX: &str =
    "SELECT book_id, title FROM books WHERE title LIKE ? ORDER BY title LIMIT ? OFFSET ?";
const SQL_COUNT_BY_PREFIX: &str = "SELECT COUNT(*) FROM books WHERE title LIKE ?";
const SQL_BOOK_BY_ID: &str = "SELECT book_id, title, authors, genres, summary, pages, rating, \
     rating_count FROM books WHERE book_id = ?";

/// MySQL Book Repository
pub struct MySqlBookRepository {
    pool: DbPool,
}

impl MySqlBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// 将用户提供的前缀转为 LIKE 模式，转义 LIKE 元字符
fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(FromRow)]
struct BookSummaryRow {
    book_id: i64,
    title: String,
}

impl From<BookSummaryRow> for BookSummaryRecord {
    fn from(row: BookSummaryRow) -> Self {
        Self {
            book_id: row.book_id,
            title: row.title,
        }
    }
}

#[derive(FromRow)]
struct BookRow {
    book_id: i64,
    title: String,
    authors: String,
    genres: String,
    summary: String,
    pages: i64,
    rating: f64,
    rating_count: i64,
}

impl From<BookRow> for BookRecord {
    fn from(row: BookRow) -> Self {
        Self {
            book_id: row.book_id,
            title: row.title,
            authors: row.authors,
            genres: row.genres,
            summary: row.summary,
            pages: row.pages,
            rating: row.rating,
            rating_count: row.rating_count,
        }
    }
}

#[async_trait]
impl BookRepositoryPort for MySqlBookRepository {
    async fn find_by_title_prefix(
        &self,
        prefix: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<BookSummaryRecord>, RepositoryError> {
        let rows: Vec<BookSummaryRow> = sqlx::query_as(SQL_BOOKS_BY_PREFIX)
            .bind(prefix_pattern(prefix))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(BookSummaryRecord::from).collect())
    }

    async fn count_by_title_prefix(&self, prefix: &str) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(SQL_COUNT_BY_PREFIX)
            .bind(prefix_pattern(prefix))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(count.max(0) as u64)
    }

    async fn find_by_id(&self, book_id: i64) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(SQL_BOOK_BY_ID)
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(BookRecord::from))
    }
}
