//! 领域层 - 纯逻辑
//!
//! - book: 管道分隔字段的投影变换
//! - pagination: 分页窗口计算

pub mod book;
pub mod pagination;

pub use pagination::{parse_offset, PageWindow, PAGE_SIZE};
