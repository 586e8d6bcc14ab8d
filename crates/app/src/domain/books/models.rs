//! Book Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Book UUID
pub type BookUuid = TypedUuid<Book>;

/// Book Model
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub uuid: BookUuid,
    pub details: BookDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Editable book fields. `price` is in minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub isbn: Option<String>,
    pub price: u64,
    pub rating: f64,
    pub reviews: u32,
    pub in_stock: bool,
    pub featured: bool,
}

/// New Book Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub uuid: BookUuid,
    pub details: BookDetails,
}

/// Catalog filter; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Exact genre
    pub genre: Option<String>,

    /// Case-insensitive substring of title or author
    pub search: Option<String>,
}

impl From<booknest::books::Book> for NewBook {
    fn from(book: booknest::books::Book) -> Self {
        Self {
            uuid: BookUuid::from_uuid(book.id.into_uuid()),
            details: BookDetails {
                title: book.title,
                author: book.author,
                genre: book.genre,
                description: book.description,
                isbn: book.isbn,
                price: book.price,
                rating: book.rating,
                reviews: book.reviews,
                in_stock: book.in_stock,
                featured: book.featured,
            },
        }
    }
}
