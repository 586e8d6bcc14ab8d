//! Admin User List Handler

use std::sync::Arc;

use booknest::pricing::format_money;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booknest_app::domain::users::models::UserSummary;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserSummaryResponse {
    pub id: Uuid,

    pub name: String,

    pub email: String,

    /// `user` or `admin`
    pub role: String,

    /// Orders ever placed, cancelled ones included
    pub total_orders: u64,

    /// Sum of order totals, cancelled orders excluded
    pub total_spent: String,

    pub formatted_total_spent: String,

    pub created_at: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.user.uuid.into(),
            name: summary.user.name,
            email: summary.user.email,
            role: summary.user.role.to_string(),
            total_orders: summary.total_orders,
            total_spent: summary.total_spent.to_string(),
            formatted_total_spent: format_money(summary.total_spent),
            created_at: summary.user.created_at.to_string(),
        }
    }
}

/// List Users Handler
///
/// Returns every user, oldest first, with their order count and spend.
#[endpoint(
    tags("admin"),
    summary = "List Users",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Users"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<UserSummaryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .or_500("failed to list users")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
