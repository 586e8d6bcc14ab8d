//! Book Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use booknest_app::domain::books::models::BookFilter;

use crate::{
    books::{BookResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BooksResponse {
    /// The list of books
    pub books: Vec<BookResponse>,
}

/// Book Index Handler
///
/// Returns the catalog, optionally narrowed by genre and a title/author search.
#[endpoint(tags("books"), summary = "List Books")]
pub(crate) async fn handler(
    genre: QueryParam<String, false>,
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<BooksResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = BookFilter {
        genre: non_blank(genre.into_inner()),
        search: non_blank(q.into_inner()),
    };

    let books = state
        .app
        .books
        .list_books(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BooksResponse {
        books: books.into_iter().map(Into::into).collect(),
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
