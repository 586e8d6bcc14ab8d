//! Create Book Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use booknest_app::domain::books::models::{BookUuid, NewBook};

use crate::{
    books::{BookRequest, BookResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Create Book Handler
#[endpoint(
    tags("books"),
    summary = "Create Book",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Book created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<BookRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let book = state
        .app
        .books
        .create_book(NewBook {
            uuid: BookUuid::new(),
            details: json.into_inner().into(),
        })
        .await
        .map_err(into_status_error)?;

    info!(book_uuid = %book.uuid, title = %book.details.title, "created book");

    res.add_header(LOCATION, format!("/api/books/{}", book.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(book.into()))
}

#[cfg(test)]
mod tests {
    use booknest_app::domain::books::{BooksServiceError, models::Book};
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, admin_service, make_details};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("books").post(handler))
    }

    #[tokio::test]
    async fn test_create_book_returns_201_with_location() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .books
            .expect_create_book()
            .once()
            .withf(|new| new.details == make_details("The Great Gatsby", 1299))
            .return_once(|new| {
                Ok(Book {
                    uuid: new.uuid,
                    details: new.details,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                    deleted_at: None,
                })
            });

        let mut res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "The Great Gatsby",
                "author": "F. Scott Fitzgerald",
                "genre": "Fiction",
                "description": "A novel of the Jazz Age.",
                "price": 1299,
                "rating": 4.5,
                "reviews": 120,
            }))
            .send(&make_service(mocks))
            .await;

        let body: BookResponse = res.take_json().await?;
        let location = res
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/books/{}", body.id)));
        assert!(body.in_stock, "defaults to in stock");
        assert!(!body.featured, "defaults to not featured");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_book_rejected_by_storage_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .books
            .expect_create_book()
            .once()
            .return_once(|_| Err(BooksServiceError::InvalidData));

        let res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "",
                "author": "Nobody",
                "genre": "Fiction",
                "price": 100,
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_book_negative_price_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.books.expect_create_book().never();

        let res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "Emma",
                "author": "Jane Austen",
                "genre": "Romance",
                "price": -5,
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
