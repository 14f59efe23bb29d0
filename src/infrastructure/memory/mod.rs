//! In-Memory Adapters

mod book_store;

pub use book_store::InMemoryBookRepository;
