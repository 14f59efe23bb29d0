//! HTTP Layer - 服务端渲染页面 + JSON 内容协商

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod negotiate;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use negotiate::{negotiate, Representation};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
