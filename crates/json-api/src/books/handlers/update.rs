//! Update Book Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    books::{BookRequest, BookResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Update Book Handler
#[endpoint(
    tags("books"),
    summary = "Update Book",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Book updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "books.update",
    skip(book, json, depot),
    fields(book_uuid = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    book: PathParam<Uuid>,
    json: JsonBody<BookRequest>,
    depot: &mut Depot,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let book = book.into_inner();

    let span = tracing::Span::current();

    span.record("book_uuid", tracing::field::display(book));
    span.record("price", request.price);

    let updated = state
        .app
        .books
        .update_book(book.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(book_uuid = %book, "updated book");

    Ok(Json(updated.into()))
}
