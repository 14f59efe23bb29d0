//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort, BookSummaryRecord};
use crate::application::queries::{GetBookDetail, ListBooksByPrefix};
use crate::domain::{PageWindow, PAGE_SIZE};

// ============================================================================
// Response DTOs
// ============================================================================

/// 一页图书列表及其导航状态
#[derive(Debug, Clone)]
pub struct BookListing {
    pub prefix: String,
    pub books: Vec<BookSummaryRecord>,
    pub window: PageWindow,
}

impl BookListing {
    /// 本页是否有结果（由实际取到的行数决定，而非总数）
    pub fn has_results(&self) -> bool {
        !self.books.is_empty()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListBooksByPrefix Handler
///
/// 分页查询与总数查询二者任一失败即整个请求失败，
/// 不返回总数未知的"半页"结果
pub struct ListBooksByPrefixHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksByPrefixHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: ListBooksByPrefix) -> Result<BookListing, ApplicationError> {
        let books = self
            .book_repo
            .find_by_title_prefix(&query.prefix, PAGE_SIZE, query.offset)
            .await?;
        let total_count = self.book_repo.count_by_title_prefix(&query.prefix).await?;

        Ok(BookListing {
            prefix: query.prefix,
            books,
            window: PageWindow::new(query.offset, PAGE_SIZE, total_count),
        })
    }
}

/// GetBookDetail Handler
pub struct GetBookDetailHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookDetailHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBookDetail) -> Result<BookRecord, ApplicationError> {
        self.book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryBookRepository;

    fn seeded_repo() -> Arc<dyn BookRepositoryPort> {
        let books = (0..25)
            .map(|i| BookRecord {
                book_id: i,
                title: format!("Aardvark {:02}", i),
                authors: "Some Author".to_string(),
                genres: "Fiction".to_string(),
                summary: String::new(),
                pages: 100,
                rating: 4.0,
                rating_count: 10,
            })
            .collect();
        Arc::new(InMemoryBookRepository::new(books))
    }

    #[tokio::test]
    async fn test_first_page_has_next() {
        let handler = ListBooksByPrefixHandler::new(seeded_repo());
        let listing = handler
            .handle(ListBooksByPrefix {
                prefix: "A".to_string(),
                offset: 0,
            })
            .await
            .unwrap();

        assert_eq!(listing.books.len(), 10);
        assert_eq!(listing.window.total_count, 25);
        assert!(listing.has_results());
        assert!(listing.window.has_next());
        assert_eq!(listing.window.prev_offset(), 0);
        assert_eq!(listing.window.next_offset(), 10);
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let handler = ListBooksByPrefixHandler::new(seeded_repo());
        let listing = handler
            .handle(ListBooksByPrefix {
                prefix: "A".to_string(),
                offset: 20,
            })
            .await
            .unwrap();

        assert_eq!(listing.books.len(), 5);
        assert!(listing.has_results());
        assert!(!listing.window.has_next());
        assert_eq!(listing.window.prev_offset(), 10);
    }

    #[tokio::test]
    async fn test_offset_beyond_total_yields_empty_page() {
        let handler = ListBooksByPrefixHandler::new(seeded_repo());
        let listing = handler
            .handle(ListBooksByPrefix {
                prefix: "A".to_string(),
                offset: 100,
            })
            .await
            .unwrap();

        assert!(!listing.has_results());
        assert!(!listing.window.has_next());
        assert_eq!(listing.window.prev_offset(), 90);
    }

    #[tokio::test]
    async fn test_prefix_without_matches() {
        let handler = ListBooksByPrefixHandler::new(seeded_repo());
        let listing = handler
            .handle(ListBooksByPrefix {
                prefix: "Z".to_string(),
                offset: 0,
            })
            .await
            .unwrap();

        assert!(!listing.has_results());
        assert_eq!(listing.window.total_count, 0);
        assert!(!listing.window.has_next());
    }

    #[tokio::test]
    async fn test_get_detail_found() {
        let handler = GetBookDetailHandler::new(seeded_repo());
        let book = handler.handle(GetBookDetail { book_id: 3 }).await.unwrap();
        assert_eq!(book.book_id, 3);
        assert_eq!(book.title, "Aardvark 03");
    }

    #[tokio::test]
    async fn test_get_detail_missing_is_not_found() {
        let handler = GetBookDetailHandler::new(seeded_repo());
        let err = handler
            .handle(GetBookDetail { book_id: 999 })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
