//! MySQL Persistence

mod book_repo;
mod database;

pub use book_repo::MySqlBookRepository;
pub use database::{create_pool, DatabaseConfig, DbPool};
