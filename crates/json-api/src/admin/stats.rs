//! Store Stats Handler

use std::sync::Arc;

use booknest::pricing::format_money;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use booknest_app::domain::stats::models::Stats;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsResponse {
    /// Registered users
    pub users: u64,

    /// Books in the catalog
    pub books: u64,

    /// Orders ever placed, cancelled ones included
    pub orders: u64,

    /// Sum of order totals, cancelled orders excluded
    pub revenue: String,

    pub formatted_revenue: String,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            users: stats.users,
            books: stats.books,
            orders: stats.orders,
            revenue: stats.revenue.to_string(),
            formatted_revenue: format_money(stats.revenue),
        }
    }
}

/// Store Stats Handler
///
/// Returns headline counters for the admin dashboard.
#[endpoint(
    tags("admin"),
    summary = "Store Stats",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Counters"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .stats
        .get_stats()
        .await
        .or_500("failed to compute store stats")?;

    Ok(Json(stats.into()))
}
