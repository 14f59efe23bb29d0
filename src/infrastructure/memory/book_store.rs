//! In-Memory Book Repository
//!
//! BookRepositoryPort 的内存实现，用于测试和无数据库演示。
//! 前缀匹配不区分大小写，与 MySQL 默认排序规则保持一致。

use async_trait::async_trait;

use crate::application::ports::{
    BookRecord, BookRepositoryPort, BookSummaryRecord, RepositoryError,
};

/// In-Memory Book Repository
pub struct InMemoryBookRepository {
    books: Vec<BookRecord>,
}

impl InMemoryBookRepository {
    /// 创建内存仓储，内部按标题字典序保存
    pub fn new(mut books: Vec<BookRecord>) -> Self {
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Self { books }
    }

    fn matching<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a BookRecord> + 'a {
        let prefix = prefix.to_lowercase();
        self.books
            .iter()
            .filter(move |b| b.title.to_lowercase().starts_with(&prefix))
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn find_by_title_prefix(
        &self,
        prefix: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<BookSummaryRecord>, RepositoryError> {
        Ok(self
            .matching(prefix)
            .skip(offset as usize)
            .take(limit as usize)
            .map(|b| BookSummaryRecord {
                book_id: b.book_id,
                title: b.title.clone(),
            })
            .collect())
    }

    async fn count_by_title_prefix(&self, prefix: &str) -> Result<u64, RepositoryError> {
        Ok(self.matching(prefix).count() as u64)
    }

    async fn find_by_id(&self, book_id: i64) -> Result<Option<BookRecord>, RepositoryError> {
        Ok(self.books.iter().find(|b| b.book_id == book_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str) -> BookRecord {
        BookRecord {
            book_id: id,
            title: title.to_string(),
            authors: "A. Author".to_string(),
            genres: "Fiction".to_string(),
            summary: String::new(),
            pages: 1,
            rating: 0.0,
            rating_count: 0,
        }
    }

    #[tokio::test]
    async fn test_prefix_filter_is_case_insensitive() {
        let repo = InMemoryBookRepository::new(vec![
            book(1, "alpha"),
            book(2, "Alphabet"),
            book(3, "Beta"),
        ]);
        assert_eq!(repo.count_by_title_prefix("A").await.unwrap(), 2);
        assert_eq!(repo.count_by_title_prefix("a").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_results_ordered_by_title() {
        let repo = InMemoryBookRepository::new(vec![
            book(1, "Charm"),
            book(2, "Cab"),
            book(3, "Cedar"),
        ]);
        let page = repo.find_by_title_prefix("C", 10, 0).await.unwrap();
        let titles: Vec<_> = page.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Cab", "Cedar", "Charm"]);
    }

    #[tokio::test]
    async fn test_window_respects_limit_and_offset() {
        let books = (0..15).map(|i| book(i, &format!("D {:02}", i))).collect();
        let repo = InMemoryBookRepository::new(books);

        let page = repo.find_by_title_prefix("D", 10, 10).await.unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].title, "D 10");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryBookRepository::new(vec![book(7, "Seven")]);
        assert!(repo.find_by_id(7).await.unwrap().is_some());
        assert!(repo.find_by_id(8).await.unwrap().is_none());
    }
}
