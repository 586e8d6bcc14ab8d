//! Update Cart Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{CartResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateQuantityRequest {
    pub book_id: Uuid,

    /// New quantity; zero or less removes the line
    pub quantity: i64,
}

/// Update Cart Quantity Handler
#[endpoint(
    tags("cart"),
    summary = "Update Cart Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Book is not in the cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let request = json.into_inner();

    let cart = state
        .app
        .carts
        .update_quantity(principal.user, request.book_id.into(), request.quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::{
        books::models::BookUuid,
        carts::{CartsServiceError, models::Cart},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, user_service};

    use super::{super::tests::make_cart, *};

    fn make_service(mocks: Mocks) -> Service {
        user_service(mocks, Router::with_path("cart").put(handler))
    }

    #[tokio::test]
    async fn test_update_sets_quantity() -> TestResult {
        let book = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_update_quantity()
            .once()
            .withf(move |user, b, quantity| *user == TEST_USER_UUID && *b == book && *quantity == 4)
            .return_once(move |_, _, _| Ok(make_cart(&[(book, 1000, 4)])));

        let mut res = TestClient::put("http://example.com/cart")
            .json(&json!({ "bookId": book.into_uuid(), "quantity": 4 }))
            .send(&make_service(mocks))
            .await;

        let cart: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(cart.item_count, 4);
        assert_eq!(cart.formatted_total, "$44.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_zero_is_forwarded() -> TestResult {
        let book = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_update_quantity()
            .once()
            .withf(|_, _, quantity| *quantity == 0)
            .return_once(|_, _, _| Ok(Cart::default()));

        let mut res = TestClient::put("http://example.com/cart")
            .json(&json!({ "bookId": book.into_uuid(), "quantity": 0 }))
            .send(&make_service(mocks))
            .await;

        let cart: CartResponse = res.take_json().await?;

        assert!(cart.items.is_empty(), "line removed");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_absent_line_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/cart")
            .json(&json!({ "bookId": BookUuid::new().into_uuid(), "quantity": 2 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
