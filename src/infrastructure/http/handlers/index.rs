//! Index Handler - 首页字母/数字索引

use axum::response::Html;

use crate::infrastructure::http::render;

/// 首页
pub async fn index() -> Html<String> {
    Html(render::index_page())
}

/// 兜底 404（未匹配路由且静态文件不存在）
pub async fn not_found() -> (axum::http::StatusCode, Html<String>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Html(render::not_found_page()),
    )
}
