//! Ports - 出站端口
//!
//! 六边形架构端口定义，具体实现在 infrastructure 层

mod book_repository;
mod review_client;

pub use book_repository::{BookRecord, BookRepositoryPort, BookSummaryRecord, RepositoryError};
pub use review_client::{ReviewClientPort, ReviewError, ReviewLookup, ReviewRecord};
