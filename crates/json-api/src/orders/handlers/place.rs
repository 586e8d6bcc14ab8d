//! Place Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use booknest_app::domain::orders::models::{NewOrder, OrderUuid};

use crate::{
    extensions::*,
    observability,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Place Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderRequest {
    pub shipping_address: String,
    pub payment_method: String,
}

/// Place Order Handler
///
/// Turns the caller's cart into an order and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty or payload invalid"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.place",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty, order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let request = json.into_inner();
    let uuid = OrderUuid::new();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(principal.user));
    span.record("order_uuid", tracing::field::display(uuid));

    let order = state
        .app
        .orders
        .place_order(
            principal.user,
            NewOrder {
                uuid,
                shipping_address: request.shipping_address,
                payment_method: request.payment_method,
            },
        )
        .await
        .map_err(into_status_error)?;

    observability::record_order_placed(order.item_count());

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
