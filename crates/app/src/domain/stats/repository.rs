//! Stats Repository

use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::stats::models::Stats;

const GET_STATS_SQL: &str = include_str!("sql/get_stats.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStatsRepository;

impl PgStatsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_stats(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<StatsRow, sqlx::Error> {
        query_as::<Postgres, StatsRow>(GET_STATS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

/// Raw counters as `PostgreSQL` returns them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatsRow {
    users: i64,
    books: i64,
    orders: i64,
    revenue: Decimal,
}

impl TryFrom<StatsRow> for Stats {
    type Error = std::num::TryFromIntError;

    fn try_from(row: StatsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            users: u64::try_from(row.users)?,
            books: u64::try_from(row.books)?,
            orders: u64::try_from(row.orders)?,
            revenue: row.revenue,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for StatsRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            users: row.try_get("users")?,
            books: row.try_get("books")?,
            orders: row.try_get("orders")?,
            revenue: row.try_get("revenue")?,
        })
    }
}
