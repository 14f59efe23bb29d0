//! Review Handler - 第三方书评查询

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::GetBookReviews;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::render;
use crate::infrastructure::http::state::AppState;

/// 按标题/作者查询书评
///
/// 零结果返回 404（报文指明标题与作者），远端失败经 ApiError
/// 映射为 502/504 —— 每条路径都发送响应
pub async fn book_review(
    State(state): State<Arc<AppState>>,
    Path((title, author)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let lookup = state
        .get_reviews_handler
        .handle(GetBookReviews {
            title: title.clone(),
            author: author.clone(),
        })
        .await?;

    if lookup.num_results == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            Html(render::no_reviews_page(&title, &author)),
        )
            .into_response());
    }

    Ok(Html(render::review_page(&lookup)).into_response())
}
