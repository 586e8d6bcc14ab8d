//! Carts Repository

use sqlx::{Postgres, Transaction, query_scalar};
use uuid::Uuid;

use crate::domain::{carts::models::CartUuid, users::models::UserUuid};

const UPSERT_CART_SQL: &str = include_str!("../sql/upsert_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Return the user's cart, creating it on first use.
    pub(crate) async fn upsert_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartUuid, sqlx::Error> {
        let uuid: Uuid = query_scalar(UPSERT_CART_SQL)
            .bind(CartUuid::new().into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(CartUuid::from_uuid(uuid))
    }
}
