//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService, JwtSecret},
    database::{self, Db, PoolSettings},
    domain::{
        books::{BooksService, PgBooksService},
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        stats::{PgStatsService, StatsService},
        users::{PgUsersService, UsersService},
        wishlists::{PgWishlistsService, WishlistsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub books: Arc<dyn BooksService>,
    pub users: Arc<dyn UsersService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub wishlists: Arc<dyn WishlistsService>,
    pub stats: Arc<dyn StatsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        pool: PoolSettings,
        jwt_secret: JwtSecret,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, pool)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(Db::new(pool), jwt_secret))
    }

    #[must_use]
    pub fn new(db: Db, jwt_secret: JwtSecret) -> Self {
        let users: Arc<dyn UsersService> = Arc::new(PgUsersService::new(db.clone()));

        Self {
            books: Arc::new(PgBooksService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            wishlists: Arc::new(PgWishlistsService::new(db.clone())),
            stats: Arc::new(PgStatsService::new(db)),
            auth: Arc::new(JwtAuthService::new(Arc::clone(&users), jwt_secret)),
            users,
        }
    }
}
