//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        books::models::BookUuid,
        carts::{
            errors::CartsServiceError,
            models::{Cart, NewCartItem},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(Cart::from_items(items))
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<Cart, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.upsert_cart(&mut tx, user).await?;

        let rows_affected = self
            .items_repository
            .add_cart_item(&mut tx, cart, &item)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::InvalidReference);
        }

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(Cart::from_items(items))
    }

    async fn update_quantity(
        &self,
        user: UserUuid,
        book: BookUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        if quantity < 1 {
            return self.remove_item(user, book).await;
        }

        let quantity = u32::try_from(quantity)?;

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .items_repository
            .update_cart_item(&mut tx, user, book, quantity)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(Cart::from_items(items))
    }

    async fn remove_item(&self, user: UserUuid, book: BookUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.items_repository
            .delete_cart_item(&mut tx, user, book)
            .await?;

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(Cart::from_items(items))
    }

    async fn clear_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.items_repository.clear_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(Cart::default())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's cart; empty when they have never added anything.
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Add copies of a book, creating the cart on first use.
    async fn add_item(&self, user: UserUuid, item: NewCartItem)
    -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity; anything below 1 removes the line.
    async fn update_quantity(
        &self,
        user: UserUuid,
        book: BookUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line. Removing a book that is not in the cart is a no-op.
    async fn remove_item(&self, user: UserUuid, book: BookUuid) -> Result<Cart, CartsServiceError>;

    /// Remove every line.
    async fn clear_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;
}
