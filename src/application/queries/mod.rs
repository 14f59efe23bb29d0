//! Queries - 查询及处理器

pub mod handlers;

mod book_queries;
mod review_queries;

pub use book_queries::{GetBookDetail, ListBooksByPrefix};
pub use review_queries::GetBookReviews;
