//! Books

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while loading a catalog fixture.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fixture could not be parsed.
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_norway::Error),

    /// Two books in the fixture share an identifier.
    #[error("duplicate book id {0}")]
    DuplicateId(BookId),
}

/// Book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a new, time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for BookId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

/// A catalog book.
///
/// `price` is held in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Book identifier
    #[serde(default)]
    pub id: BookId,

    /// Title
    pub title: String,

    /// Author
    pub author: String,

    /// Genre
    pub genre: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// ISBN, when known
    #[serde(default)]
    pub isbn: Option<String>,

    /// Unit price in minor units
    pub price: u64,

    /// Average rating
    #[serde(default)]
    pub rating: f64,

    /// Number of reviews
    #[serde(default)]
    pub reviews: u32,

    /// Whether the book can currently be bought
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,

    /// Whether the book is featured on the home page
    #[serde(default)]
    pub featured: bool,
}

fn in_stock_default() -> bool {
    true
}

/// Parse a YAML catalog fixture into books.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed YAML and
/// [`CatalogError::DuplicateId`] when two entries share an id.
pub fn load_catalog(yaml: &str) -> Result<Vec<Book>, CatalogError> {
    let books: Vec<Book> = serde_norway::from_str(yaml)?;

    let mut seen = rustc_hash::FxHashSet::default();

    for book in &books {
        if !seen.insert(book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }
    }

    Ok(books)
}
