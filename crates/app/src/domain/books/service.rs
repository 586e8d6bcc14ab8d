//! Books service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::books::{
        errors::BooksServiceError,
        models::{Book, BookDetails, BookFilter, BookUuid, NewBook},
        repository::PgBooksRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBooksService {
    db: Db,
    repository: PgBooksRepository,
}

impl PgBooksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBooksRepository::new(),
        }
    }
}

#[async_trait]
impl BooksService for PgBooksService {
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let books = self.repository.list_books(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(books)
    }

    async fn get_book(&self, book: BookUuid) -> Result<Book, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let book = self.repository.get_book(&mut tx, book).await?;

        tx.commit().await?;

        Ok(book)
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_book(&mut tx, book.uuid, &book.details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_book(
        &self,
        book: BookUuid,
        details: BookDetails,
    ) -> Result<Book, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_book(&mut tx, book, &details).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_book(&self, book: BookUuid) -> Result<(), BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_book(&mut tx, book).await?;

        if rows_affected == 0 {
            return Err(BooksServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BooksService: Send + Sync {
    /// Books matching `filter`, oldest first. Deleted books are never listed.
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BooksServiceError>;

    /// Retrieve a single book.
    async fn get_book(&self, book: BookUuid) -> Result<Book, BooksServiceError>;

    /// Add a book to the catalog.
    async fn create_book(&self, book: NewBook) -> Result<Book, BooksServiceError>;

    /// Replace the editable fields of a book.
    async fn update_book(
        &self,
        book: BookUuid,
        details: BookDetails,
    ) -> Result<Book, BooksServiceError>;

    /// Soft-delete a book.
    async fn delete_book(&self, book: BookUuid) -> Result<(), BooksServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::book_details};

    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn create_book_then_get_returns_it() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        let created = ctx
            .books
            .create_book(NewBook {
                uuid,
                details: book_details("Dune", 1899),
            })
            .await?;

        let fetched = ctx.books.get_book(uuid).await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(fetched.details.title, "Dune");
        assert_eq!(fetched.details.price, 1899);
        assert!(fetched.deleted_at.is_none(), "new book is live");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn list_books_filters_by_genre_and_search() -> TestResult {
        let ctx = TestContext::new().await;

        let mut dune = book_details("Dune", 1899);
        dune.genre = "Science Fiction".to_string();

        let mut emma = book_details("Emma", 999);
        emma.genre = "Romance".to_string();
        emma.author = "Jane Austen".to_string();

        for details in [dune, emma] {
            ctx.books
                .create_book(NewBook {
                    uuid: BookUuid::new(),
                    details,
                })
                .await?;
        }

        let romance = ctx
            .books
            .list_books(BookFilter {
                genre: Some("Romance".to_string()),
                search: None,
            })
            .await?;

        let austen = ctx
            .books
            .list_books(BookFilter {
                genre: None,
                search: Some("austen".to_string()),
            })
            .await?;

        let all = ctx.books.list_books(BookFilter::default()).await?;

        assert_eq!(romance.len(), 1, "genre filter");
        assert_eq!(austen.len(), 1, "search is case-insensitive over author");
        assert_eq!(all.len(), 2, "no filter lists everything");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn list_books_search_treats_wildcards_literally() -> TestResult {
        let ctx = TestContext::new().await;

        for title in ["100% Organic", "1000 Recipes"] {
            ctx.books
                .create_book(NewBook {
                    uuid: BookUuid::new(),
                    details: book_details(title, 1500),
                })
                .await?;
        }

        let percent = ctx
            .books
            .list_books(BookFilter {
                genre: None,
                search: Some("100%".to_string()),
            })
            .await?;

        let underscore = ctx
            .books
            .list_books(BookFilter {
                genre: None,
                search: Some("_".to_string()),
            })
            .await?;

        assert_eq!(percent.len(), 1, "only the literal percent sign matches");
        assert_eq!(percent[0].details.title, "100% Organic");
        assert!(underscore.is_empty(), "underscore is not a wildcard");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn update_book_replaces_details() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        ctx.books
            .create_book(NewBook {
                uuid,
                details: book_details("Dune", 1899),
            })
            .await?;

        let mut details = book_details("Dune Messiah", 1599);
        details.featured = true;

        let updated = ctx.books.update_book(uuid, details).await?;

        assert_eq!(updated.details.title, "Dune Messiah");
        assert_eq!(updated.details.price, 1599);
        assert!(updated.details.featured, "featured flag updated");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn delete_book_hides_it() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BookUuid::new();

        ctx.books
            .create_book(NewBook {
                uuid,
                details: book_details("Dune", 1899),
            })
            .await?;

        ctx.books.delete_book(uuid).await?;

        let result = ctx.books.get_book(uuid).await;

        assert!(
            matches!(result, Err(BooksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let listed = ctx.books.list_books(BookFilter::default()).await?;

        assert!(listed.is_empty(), "deleted books are not listed");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn delete_unknown_book_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.books.delete_book(BookUuid::new()).await;

        assert!(
            matches!(result, Err(BooksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn create_book_with_empty_title_is_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx
            .books
            .create_book(NewBook {
                uuid: BookUuid::new(),
                details: book_details("", 100),
            })
            .await;

        assert!(
            matches!(result, Err(BooksServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
