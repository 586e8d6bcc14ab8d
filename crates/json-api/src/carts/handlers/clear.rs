//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{CartResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Clear Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .clear_cart(principal.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::carts::models::Cart;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, user_service};

    use super::*;

    #[tokio::test]
    async fn test_clear_returns_empty_cart() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_clear_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok(Cart::default()));

        let cart: CartResponse = TestClient::post("http://example.com/cart/clear")
            .send(&user_service(
                mocks,
                Router::with_path("cart/clear").post(handler),
            ))
            .await
            .take_json()
            .await?;

        assert!(cart.items.is_empty(), "cleared");
        assert_eq!(cart.total, "0");

        Ok(())
    }
}
