//! Wishlist response models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use booknest_app::domain::books::models::Book;

use crate::books::BookResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistResponse {
    /// Wished-for books, in the order they were added
    pub books: Vec<BookResponse>,
}

impl From<Vec<Book>> for WishlistResponse {
    fn from(books: Vec<Book>) -> Self {
        Self {
            books: books.into_iter().map(Into::into).collect(),
        }
    }
}
