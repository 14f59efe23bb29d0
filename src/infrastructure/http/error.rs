//! HTTP Error Handling
//!
//! 所有数据访问/远端失败在请求边界回收并转为 HTTP 错误响应，
//! 每条代码路径恰好发送一个响应，进程不会因此崩溃。

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use super::render;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404，渲染 HTML 页面
    NotFound(String),
    /// 400
    BadRequest(String),
    /// 406，text/plain 报文指明被拒绝的 Accept 值
    NotAcceptable(String),
    /// 500（存储错误等）
    Internal(String),
    /// 502（远端网络/协议失败）
    BadGateway(String),
    /// 504（远端超时）
    GatewayTimeout(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::NotAcceptable(accept) => {
                tracing::warn!(accept = %accept, "Not acceptable");
                (
                    StatusCode::NOT_ACCEPTABLE,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    format!("Not supported: {}", accept),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render::error_page("The catalog is temporarily unavailable.")),
                )
                    .into_response()
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(error = %msg, "Review service failure");
                (
                    StatusCode::BAD_GATEWAY,
                    Html(render::error_page("The review service could not be reached.")),
                )
                    .into_response()
            }
            ApiError::GatewayTimeout(msg) => {
                tracing::error!(error = %msg, "Review service timeout");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    Html(render::error_page("The review service timed out.")),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::ExternalServiceError(msg) => ApiError::BadGateway(msg),
            ApplicationError::ExternalServiceTimeout(msg) => ApiError::GatewayTimeout(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
