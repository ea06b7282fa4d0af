//! Book (catalog entry) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier assigned by the service
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "anio_publicacion")]
    pub publication_year: Option<i64>,
    #[serde(rename = "genero")]
    pub genre: Option<String>,
}

/// Create book request. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[schema(example = json!({
    "titulo": "El Principito",
    "autor": "Saint-Exupéry",
    "isbn": "9781234567890"
}))]
pub struct CreateBook {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "anio_publicacion", default)]
    pub publication_year: Option<i64>,
    #[serde(rename = "genero", default)]
    pub genre: Option<String>,
}

impl Book {
    /// Build the stored record for a newly assigned id
    pub fn from_request(id: i32, data: CreateBook) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            isbn: data.isbn,
            publication_year: data.publication_year,
            genre: data.genre,
        }
    }
}

/// Records present in the catalog at startup
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "Don Quijote".to_string(),
            author: "Cervantes".to_string(),
            isbn: "9788491050296".to_string(),
            publication_year: None,
            genre: None,
        },
        Book {
            id: 2,
            title: "Cien años de soledad".to_string(),
            author: "García Márquez".to_string(),
            isbn: "9780307474728".to_string(),
            publication_year: None,
            genre: None,
        },
    ]
}
