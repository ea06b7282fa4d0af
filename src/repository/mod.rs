//! Repository layer for catalog storage

pub mod books;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

pub use books::InMemoryBookRepository;

/// Storage operations on book records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Number of stored books
    async fn count(&self) -> AppResult<usize>;

    /// All books in insertion order
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Store a new book under the next free id and return it
    async fn create(&self, data: CreateBook) -> AppResult<Book>;
}

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    /// Create a new repository over the given book storage
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// In-memory repository holding the seed records
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBookRepository::seeded()))
    }
}
