//! Wishlists service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        books::models::{Book, BookUuid},
        users::models::UserUuid,
        wishlists::{errors::WishlistsServiceError, repository::PgWishlistsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgWishlistsService {
    db: Db,
    repository: PgWishlistsRepository,
}

impl PgWishlistsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgWishlistsRepository::new(),
        }
    }
}

#[async_trait]
impl WishlistsService for PgWishlistsService {
    async fn get_wishlist(&self, user: UserUuid) -> Result<Vec<Book>, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let books = self.repository.get_wishlist(&mut tx, user).await?;

        tx.commit().await?;

        Ok(books)
    }

    async fn toggle(
        &self,
        user: UserUuid,
        book: BookUuid,
    ) -> Result<Vec<Book>, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self
            .repository
            .remove_wishlist_item(&mut tx, user, book)
            .await?;

        if removed == 0 {
            let added = self
                .repository
                .add_wishlist_item(&mut tx, user, book)
                .await?;

            if added == 0 {
                return Err(WishlistsServiceError::InvalidReference);
            }
        }

        let books = self.repository.get_wishlist(&mut tx, user).await?;

        tx.commit().await?;

        Ok(books)
    }
}

#[automock]
#[async_trait]
pub trait WishlistsService: Send + Sync {
    /// Books on the user's wishlist, in the order they were added.
    async fn get_wishlist(&self, user: UserUuid) -> Result<Vec<Book>, WishlistsServiceError>;

    /// Add the book when absent, remove it when present. Returns the wishlist afterwards.
    async fn toggle(
        &self,
        user: UserUuid,
        book: BookUuid,
    ) -> Result<Vec<Book>, WishlistsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_book, create_user},
    };

    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn toggle_twice_restores_wishlist() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada@example.com").await?;
        let gatsby = create_book(&ctx, "The Great Gatsby", 1299).await?;
        let emma = create_book(&ctx, "Emma", 999).await?;

        ctx.wishlists.toggle(user, gatsby).await?;

        let added = ctx.wishlists.toggle(user, emma).await?;

        assert_eq!(added.len(), 2, "both wished for");

        let removed = ctx.wishlists.toggle(user, emma).await?;

        assert_eq!(
            removed.iter().map(|book| book.uuid).collect::<Vec<_>>(),
            vec![gatsby],
            "second toggle removes"
        );
        assert_eq!(ctx.wishlists.get_wishlist(user).await?, removed);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn toggle_unknown_book_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada@example.com").await?;

        let result = ctx.wishlists.toggle(user, BookUuid::new()).await;

        assert!(
            matches!(result, Err(WishlistsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn adding_an_existing_entry_keeps_one_row() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada@example.com").await?;
        let gatsby = create_book(&ctx, "The Great Gatsby", 1299).await?;
        let repository = PgWishlistsRepository::new();

        let mut tx = ctx.db.pool().begin().await?;

        let first = repository.add_wishlist_item(&mut tx, user, gatsby).await?;
        let second = repository.add_wishlist_item(&mut tx, user, gatsby).await?;

        tx.commit().await?;

        assert_eq!((first, second), (1, 1), "duplicate insert counts as added");
        assert_eq!(ctx.wishlists.get_wishlist(user).await?.len(), 1);

        let removed = ctx.wishlists.toggle(user, gatsby).await?;

        assert!(removed.is_empty(), "a single toggle removes the entry");

        Ok(())
    }
}
