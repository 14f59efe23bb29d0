//! Persistence Layer

pub mod mysql;
