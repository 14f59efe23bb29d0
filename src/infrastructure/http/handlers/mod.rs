//! HTTP Handlers

mod book;
mod index;
mod review;

pub use book::*;
pub use index::*;
pub use review::*;
