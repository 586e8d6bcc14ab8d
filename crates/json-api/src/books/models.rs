//! Book request and response models

use booknest::pricing::{format_money, minor_to_decimal};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booknest_app::domain::books::models::{Book, BookDetails};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookResponse {
    /// The unique identifier of the book
    pub id: Uuid,

    pub title: String,

    pub author: String,

    pub genre: String,

    pub description: String,

    pub isbn: Option<String>,

    /// The price of the book in cents
    pub price: u64,

    /// The price formatted for display, e.g. `$12.99`
    pub formatted_price: String,

    /// Average review score, 0 to 5
    pub rating: f64,

    /// Number of reviews
    pub reviews: u32,

    pub in_stock: bool,

    pub featured: bool,

    /// The date and time the book was created
    pub created_at: String,

    /// The date and time the book was last updated
    pub updated_at: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        let details = book.details;

        BookResponse {
            id: book.uuid.into(),
            formatted_price: format_money(minor_to_decimal(details.price)),
            title: details.title,
            author: details.author,
            genre: details.genre,
            description: details.description,
            isbn: details.isbn,
            price: details.price,
            rating: details.rating,
            reviews: details.reviews,
            in_stock: details.in_stock,
            featured: details.featured,
            created_at: book.created_at.to_string(),
            updated_at: book.updated_at.to_string(),
        }
    }
}

/// Book Request
///
/// Body of both create and update; an update replaces every field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookRequest {
    pub title: String,

    pub author: String,

    pub genre: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub isbn: Option<String>,

    /// The price of the book in cents
    pub price: u64,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub reviews: u32,

    #[serde(default = "in_stock_by_default")]
    pub in_stock: bool,

    #[serde(default)]
    pub featured: bool,
}

fn in_stock_by_default() -> bool {
    true
}

impl From<BookRequest> for BookDetails {
    fn from(request: BookRequest) -> Self {
        BookDetails {
            title: request.title,
            author: request.author,
            genre: request.genre,
            description: request.description,
            isbn: request.isbn,
            price: request.price,
            rating: request.rating,
            reviews: request.reviews,
            in_stock: request.in_stock,
            featured: request.featured,
        }
    }
}
