//! App Router

use salvo::Router;

use crate::{
    admin,
    auth::{self, middleware},
    books, carts, orders, wishlists,
};

/// Every `/api` route. Expects [`crate::state::State`] to be injected by the caller.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(auth::register::handler))
                .push(Router::with_path("login").post(auth::login::handler)),
        )
        .push(
            Router::with_path("books")
                .get(books::index::handler)
                .push(Router::with_path("{book}").get(books::get::handler)),
        )
        .push(
            Router::new()
                .hoop(middleware::authenticate)
                .push(
                    Router::with_path("cart")
                        .get(carts::get::handler)
                        .post(carts::add::handler)
                        .put(carts::update::handler)
                        .push(Router::with_path("remove").post(carts::remove::handler))
                        .push(Router::with_path("clear").post(carts::clear::handler)),
                )
                .push(
                    Router::with_path("orders")
                        .push(Router::with_path("place").post(orders::place::handler))
                        .push(Router::with_path("my").get(orders::mine::handler)),
                )
                .push(
                    Router::with_path("user/wishlist")
                        .get(wishlists::get::handler)
                        .post(wishlists::toggle::handler),
                )
                .push(admin_router()),
        )
}

fn admin_router() -> Router {
    Router::new()
        .hoop(middleware::require_admin)
        .push(
            Router::with_path("books")
                .post(books::create::handler)
                .push(
                    Router::with_path("{book}")
                        .put(books::update::handler)
                        .delete(books::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}").put(orders::update_status::handler)),
        )
        .push(Router::with_path("admin/stats").get(admin::stats::handler))
        .push(Router::with_path("admin/users").get(admin::users::handler))
}

#[cfg(test)]
mod tests {
    use booknest::users::Role;
    use booknest_app::{
        auth::{AuthServiceError, Principal},
        domain::{books::models::BookUuid, carts::models::Cart},
    };
    use salvo::{
        affix_state::inject,
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_ADMIN_UUID, TEST_USER_UUID, make_book};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(api_router()),
        )
    }

    fn expect_caller(mocks: &mut Mocks, role: Role) {
        let user = match role {
            Role::Admin => TEST_ADMIN_UUID,
            Role::User => TEST_USER_UUID,
        };

        mocks
            .auth
            .expect_authenticate_bearer()
            .returning(move |token| {
                if token == "good" {
                    Ok(Principal { user, role })
                } else {
                    Err(AuthServiceError::InvalidToken)
                }
            });
    }

    #[tokio::test]
    async fn test_catalog_reads_are_public() -> TestResult {
        let book = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks.auth.expect_authenticate_bearer().never();
        mocks
            .books
            .expect_get_book()
            .once()
            .return_once(move |_| Ok(make_book(book, 1299)));

        let res = TestClient::get(format!("http://example.com/api/books/{book}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_requires_token() -> TestResult {
        let mut mocks = Mocks::default();

        expect_caller(&mut mocks, Role::User);
        mocks.carts.expect_get_cart().never();

        let missing = TestClient::get("http://example.com/api/cart")
            .send(&make_service(mocks))
            .await;

        assert_eq!(missing.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_with_token_is_served() -> TestResult {
        let mut mocks = Mocks::default();

        expect_caller(&mut mocks, Role::User);
        mocks
            .carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok(Cart::default()));

        let mut res = TestClient::get("http://example.com/api/cart")
            .add_header(AUTHORIZATION, "Bearer good", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("\"items\":[]"));

        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_writes_require_admin() -> TestResult {
        let mut mocks = Mocks::default();

        expect_caller(&mut mocks, Role::User);
        mocks.books.expect_create_book().never();

        let res = TestClient::post("http://example.com/api/books")
            .add_header(AUTHORIZATION, "Bearer good", true)
            .json(&json!({
                "title": "Emma",
                "author": "Jane Austen",
                "genre": "Romance",
                "price": 999,
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_with_bad_token_returns_401() -> TestResult {
        let mut mocks = Mocks::default();

        expect_caller(&mut mocks, Role::Admin);
        mocks.stats.expect_get_stats().never();

        let res = TestClient::get("http://example.com/api/admin/stats")
            .add_header(AUTHORIZATION, "Bearer forged", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_user_list_requires_admin() -> TestResult {
        let mut mocks = Mocks::default();

        expect_caller(&mut mocks, Role::User);
        mocks.users.expect_list_users().never();

        let res = TestClient::get("http://example.com/api/admin/users")
            .add_header(AUTHORIZATION, "Bearer good", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
