//! Data models for Libros

pub mod book;

// Re-export commonly used types
pub use book::{Book, CreateBook};
