//! Toggle Wishlist Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    wishlists::{WishlistResponse, errors::into_status_error},
};

/// Toggle Wishlist Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToggleWishlistRequest {
    pub book_id: Uuid,
}

/// Toggle Wishlist Handler
///
/// Adds the book when it is not wished for yet, removes it otherwise.
#[endpoint(
    tags("wishlist"),
    summary = "Toggle Wishlist Book",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Wishlist after the toggle"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown book"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ToggleWishlistRequest>,
    depot: &mut Depot,
) -> Result<Json<WishlistResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let books = state
        .app
        .wishlists
        .toggle(principal.user, json.into_inner().book_id.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::{books::models::BookUuid, wishlists::WishlistsServiceError};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, make_book, user_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        user_service(mocks, Router::with_path("user/wishlist").post(handler))
    }

    #[tokio::test]
    async fn test_toggle_returns_wishlist_after_change() -> TestResult {
        let book = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .wishlists
            .expect_toggle()
            .once()
            .withf(move |user, b| *user == TEST_USER_UUID && *b == book)
            .return_once(move |_, _| Ok(vec![make_book(book, 1299)]));

        let mut res = TestClient::post("http://example.com/user/wishlist")
            .json(&json!({ "bookId": book.into_uuid() }))
            .send(&make_service(mocks))
            .await;

        let response: WishlistResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.books.len(), 1, "book added");

        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_unknown_book_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .wishlists
            .expect_toggle()
            .once()
            .return_once(|_, _| Err(WishlistsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/user/wishlist")
            .json(&json!({ "bookId": BookUuid::new().into_uuid() }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
