//! Review Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ReviewClientPort, ReviewLookup};
use crate::application::queries::GetBookReviews;

/// GetBookReviews Handler
///
/// 远端失败（网络/超时/解析）通过 Result 返回，
/// 由 HTTP 层映射为 502/504 响应，绝不悬置请求
pub struct GetBookReviewsHandler {
    review_client: Arc<dyn ReviewClientPort>,
}

impl GetBookReviewsHandler {
    pub fn new(review_client: Arc<dyn ReviewClientPort>) -> Self {
        Self { review_client }
    }

    pub async fn handle(&self, query: GetBookReviews) -> Result<ReviewLookup, ApplicationError> {
        let lookup = self
            .review_client
            .lookup(&query.title, &query.author)
            .await?;

        tracing::debug!(
            title = %query.title,
            author = %query.author,
            num_results = lookup.num_results,
            "Review lookup completed"
        );

        Ok(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ReviewRecord;
    use crate::infrastructure::adapters::FakeReviewClient;

    #[tokio::test]
    async fn test_lookup_passes_through_results() {
        let client = Arc::new(FakeReviewClient::with_reviews(vec![ReviewRecord {
            book_title: "Good Omens".to_string(),
            ..Default::default()
        }]));
        let handler = GetBookReviewsHandler::new(client);

        let lookup = handler
            .handle(GetBookReviews {
                title: "Good Omens".to_string(),
                author: "Neil Gaiman".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(lookup.num_results, 1);
        assert_eq!(lookup.reviews[0].book_title, "Good Omens");
    }

    #[tokio::test]
    async fn test_lookup_failure_maps_to_external_service_error() {
        let handler = GetBookReviewsHandler::new(Arc::new(FakeReviewClient::failing()));
        let err = handler
            .handle(GetBookReviews {
                title: "t".to_string(),
                author: "a".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
    }
}
