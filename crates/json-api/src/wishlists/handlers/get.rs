//! Get Wishlist Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    wishlists::{WishlistResponse, errors::into_status_error},
};

/// Get Wishlist Handler
#[endpoint(
    tags("wishlist"),
    summary = "Get Wishlist",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<WishlistResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let books = state
        .app
        .wishlists
        .get_wishlist(principal.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::books::models::BookUuid;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, make_book, user_service};

    use super::*;

    #[tokio::test]
    async fn test_get_wishlist_returns_books() -> TestResult {
        let book = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .wishlists
            .expect_get_wishlist()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(vec![make_book(book, 1299)]));

        let response: WishlistResponse = TestClient::get("http://example.com/user/wishlist")
            .send(&user_service(
                mocks,
                Router::with_path("user/wishlist").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response.books.iter().map(|book| book.id).collect::<Vec<_>>(),
            vec![book.into_uuid()]
        );

        Ok(())
    }
}
