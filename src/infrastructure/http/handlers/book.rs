//! Book Handlers - 列表分页与详情内容协商

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ports::BookRecord;
use crate::application::{GetBookDetail, ListBooksByPrefix};
use crate::domain::book::split_list;
use crate::domain::parse_offset;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::negotiate::{negotiate, Representation};
use crate::infrastructure::http::render;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 列表页查询参数
///
/// offset 以原始字符串接收：解析失败静默回退为 0，不报 400
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub offset: Option<String>,
}

/// 详情 JSON 响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailResponse {
    pub book_id: i64,
    pub title: String,
    pub authors: Vec<Vec<String>>,
    pub summary: String,
    pub pages: i64,
    pub rating: f64,
    pub rating_count: i64,
    pub genre: Vec<Vec<String>>,
}

impl From<BookRecord> for BookDetailResponse {
    fn from(book: BookRecord) -> Self {
        Self {
            book_id: book.book_id,
            title: book.title,
            // 单元素嵌套数组是既有客户端解析的形状，保持不变
            authors: vec![split_list(&book.authors)],
            summary: book.summary,
            pages: book.pages,
            rating: book.rating,
            rating_count: book.rating_count,
            genre: vec![split_list(&book.genres)],
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 按起始字符分页列出图书
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Path(start_with): Path<String>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Html<String>, ApiError> {
    let offset = parse_offset(query.offset.as_deref());

    let listing = state
        .list_books_handler
        .handle(ListBooksByPrefix {
            prefix: start_with,
            offset,
        })
        .await?;

    Ok(Html(render::listing_page(&listing)))
}

/// 图书详情，按 Accept 头返回 HTML 或 JSON，均不接受时 406
pub async fn book_detail(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok());
    let representation = negotiate(accept).map_err(ApiError::NotAcceptable)?;

    let book = state
        .get_book_detail_handler
        .handle(GetBookDetail { book_id })
        .await?;

    let response = match representation {
        Representation::Html => Html(render::detail_page(&book)).into_response(),
        Representation::Json => Json(BookDetailResponse::from(book)).into_response(),
    };

    Ok(response)
}
