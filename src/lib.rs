//! Bookrack - 图书目录浏览服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Pagination: 分页窗口计算（offset/limit/total）
//! - Book: 管道分隔字段的纯投影变换
//!
//! 应用层 (application/):
//! - Ports: 端口定义（BookRepository, ReviewClient）
//! - Queries: 查询处理器（按前缀列书、书籍详情、书评查询）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 服务端渲染页面 + JSON 内容协商
//! - Persistence: MySQL 连接池仓储
//! - Memory: 内存仓储（测试/演示）
//! - Adapters: 第三方书评 API 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
