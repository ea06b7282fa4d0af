//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Number of books currently in the catalog
    pub async fn count_books(&self) -> AppResult<usize> {
        self.repository.books.count().await
    }

    /// All books, oldest first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Add a book to the catalog. Duplicate ISBNs are accepted.
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(data).await?;
        tracing::info!("Catalog create: book id={} isbn={}", book.id, book.isbn);
        Ok(book)
    }
}
