//! Application State
//!
//! 显式构造、注入路由的依赖集合：启动时创建，关闭时随服务器销毁。
//! 不使用模块级单例。

use std::sync::Arc;

use crate::application::{
    BookRepositoryPort, GetBookDetailHandler, GetBookReviewsHandler, ListBooksByPrefixHandler,
    ReviewClientPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,
    pub review_client: Arc<dyn ReviewClientPort>,

    // ========== Query Handlers ==========
    pub list_books_handler: ListBooksByPrefixHandler,
    pub get_book_detail_handler: GetBookDetailHandler,
    pub get_reviews_handler: GetBookReviewsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_client: Arc<dyn ReviewClientPort>,
    ) -> Self {
        Self {
            book_repo: book_repo.clone(),
            review_client: review_client.clone(),
            list_books_handler: ListBooksByPrefixHandler::new(book_repo.clone()),
            get_book_detail_handler: GetBookDetailHandler::new(book_repo),
            get_reviews_handler: GetBookReviewsHandler::new(review_client),
        }
    }
}
