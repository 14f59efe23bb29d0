//! Query Handlers

mod book_handlers;
mod review_handlers;

pub use book_handlers::{BookListing, GetBookDetailHandler, ListBooksByPrefixHandler};
pub use review_handlers::GetBookReviewsHandler;
