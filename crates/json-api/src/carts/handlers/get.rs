//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{CartResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the caller's cart with its totals. Never-used carts are empty.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(principal.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::{books::models::BookUuid, carts::models::Cart};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, public_service, user_service};

    use super::{super::tests::make_cart, *};

    fn route() -> Router {
        Router::with_path("cart").get(handler)
    }

    #[tokio::test]
    async fn test_get_cart_returns_lines_and_totals() -> TestResult {
        let gatsby = BookUuid::new();
        let mockingbird = BookUuid::new();
        let cart = make_cart(&[(gatsby, 1299, 1), (mockingbird, 1499, 2)]);

        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(cart));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&user_service(mocks, route()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.items.len(), 2, "two lines");
        assert_eq!(response.item_count, 3);
        assert_eq!(response.subtotal, "42.97");
        assert_eq!(response.formatted_total, "$47.27");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart_has_zero_totals() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_get_cart()
            .once()
            .return_once(|_| Ok(Cart::default()));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&user_service(mocks, route()))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty(), "no lines");
        assert_eq!(response.item_count, 0);
        assert_eq!(response.formatted_total, "$0.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_without_principal_returns_401() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.carts.expect_get_cart().never();

        let res = TestClient::get("http://example.com/cart")
            .send(&public_service(mocks, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
