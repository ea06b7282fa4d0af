//! In-memory book storage

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::{
    error::AppResult,
    models::book::{seed_books, Book, CreateBook},
};

/// Book storage backed by an insertion-ordered map keyed by id
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<IndexMap<i32, Book>>,
}

impl InMemoryBookRepository {
    /// Empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage holding the startup records
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(books.into_iter().map(|b| (b.id, b)).collect()),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn count(&self) -> AppResult<usize> {
        Ok(self.books.read().await.len())
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn create(&self, data: CreateBook) -> AppResult<Book> {
        // The write guard spans max lookup and insert so ids never collide
        let mut books = self.books.write().await;
        let id = books.keys().max().map_or(1, |max| max + 1);
        let book = Book::from_request(id, data);
        books.insert(id, book.clone());
        Ok(book)
    }
}
