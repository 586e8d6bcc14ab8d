//! Remove From Cart Handler

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

/// Remove From Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoveFromCartRequest {
    pub book_id: Uuid,
}

/// Remove From Cart Handler
///
/// Removing a book that is not in the cart leaves the cart unchanged.
#[endpoint(
    tags("cart"),
    summary = "Remove From Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    json: JsonBody<RemoveFromCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .remove_item(principal.user, json.into_inner().book_id.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::books::models::BookUuid;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, user_service};

    use super::{super::tests::make_cart, *};

    #[tokio::test]
    async fn test_remove_returns_remaining_lines() -> TestResult {
        let kept = BookUuid::new();
        let removed = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_remove_item()
            .once()
            .withf(move |user, book| *user == TEST_USER_UUID && *book == removed)
            .return_once(move |_, _| Ok(make_cart(&[(kept, 1299, 1)])));

        let cart: CartResponse = TestClient::post("http://example.com/cart/remove")
            .json(&json!({ "bookId": removed.into_uuid() }))
            .send(&user_service(
                mocks,
                Router::with_path("cart/remove").post(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(
            cart.items.iter().map(|item| item.book.id).collect::<Vec<_>>(),
            vec![kept.into_uuid()]
        );

        Ok(())
    }
}
