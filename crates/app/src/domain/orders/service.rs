//! Orders service.

use async_trait::async_trait;
use booknest::{orders::OrderStatus, pricing};
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::repositories::PgCartItemsRepository,
        orders::{
            errors::OrdersServiceError,
            models::{NewOrder, Order, OrderItem, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    cart_items: PgCartItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            cart_items: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, user: UserUuid, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        // Locked until commit so a concurrent placement cannot consume the same lines.
        let lines = self.cart_items.lock_cart_items(&mut tx, user).await?;

        if lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let totals = pricing::totals(&lines);
        let items = lines.iter().map(OrderItem::from).collect();

        let placed = self
            .repository
            .create_order(&mut tx, user, &order, &totals, items)
            .await?;

        self.cart_items.clear_cart(&mut tx, user).await?;

        tx.commit().await?;

        info!(order = %placed.uuid, user = %user, total = %placed.total, "order placed");

        Ok(placed)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_user_orders(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_status(&mut tx, order, status).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the user's cart into an order and empty the cart, atomically.
    async fn place_order(&self, user: UserUuid, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order with its lines.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// The user's orders, newest first.
    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Every order, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Move an order to `status`.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
