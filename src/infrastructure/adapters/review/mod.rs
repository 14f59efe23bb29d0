//! Review Client Adapters

mod fake_review_client;
mod http_review_client;

pub use fake_review_client::FakeReviewClient;
pub use http_review_client::{HttpReviewClient, HttpReviewClientConfig};
