//! Adapters - 外部服务适配器

mod review;

pub use review::{FakeReviewClient, HttpReviewClient, HttpReviewClientConfig};
