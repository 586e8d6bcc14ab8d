//! Get Book Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    books::{BookResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Get Book Handler
///
/// Returns a book.
#[endpoint(
    tags("books"),
    summary = "Get Book",
    responses(
        (status_code = StatusCode::OK, description = "Book found"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    book: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let book = state
        .app
        .books
        .get_book(book.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(book.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::books::{BooksServiceError, models::BookUuid};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_book, public_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        public_service(mocks, Router::with_path("books/{book}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_book() -> TestResult {
        let uuid = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .books
            .expect_get_book()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_book(uuid, 1299)));

        let mut res = TestClient::get(format!("http://example.com/books/{uuid}"))
            .send(&make_service(mocks))
            .await;

        let body: BookResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.title, "The Great Gatsby");
        assert_eq!(body.price, 1299);
        assert!(body.in_stock, "in stock");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_book_returns_404() -> TestResult {
        let uuid = BookUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .books
            .expect_get_book()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(BooksServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/books/{uuid}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.books.expect_get_book().never();

        let res = TestClient::get("http://example.com/books/123")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
