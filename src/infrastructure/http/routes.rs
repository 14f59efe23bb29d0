//! HTTP Routes
//!
//! 路由表（权威定义）：
//! - GET /                              首页字母/数字索引 (HTML)
//! - GET /getBook/:start_with?offset=N  按起始字符分页列表 (HTML)
//! - GET /getBookDetail/:book_id        图书详情 (HTML/JSON 按 Accept；否则 406)
//! - GET /getBookReview/:title/:author  第三方书评查询 (HTML；无结果 404)
//! - GET 静态文件                        public 目录原样返回
//! - *   未匹配                          渲染 404 页

use axum::handler::HandlerWithoutStateExt;
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(static_dir: impl AsRef<Path>) -> Router<Arc<AppState>> {
    // 未命中动态路由时先查静态文件，再兜底 404
    let static_files =
        ServeDir::new(static_dir).not_found_service(handlers::not_found.into_service());

    Router::new()
        .route("/", get(handlers::index))
        .route("/getBook/:start_with", get(handlers::list_books))
        .route("/getBookDetail/:book_id", get(handlers::book_detail))
        .route("/getBookReview/:title/:author", get(handlers::book_review))
        .fallback_service(static_files)
}
