//! Book Errors

use salvo::http::StatusError;
use tracing::error;

use booknest_app::domain::books::BooksServiceError;

pub(crate) fn into_status_error(error: BooksServiceError) -> StatusError {
    match error {
        BooksServiceError::AlreadyExists => StatusError::conflict().brief("Book already exists"),
        BooksServiceError::NotFound => StatusError::not_found().brief("Book not found"),
        BooksServiceError::InvalidReference
        | BooksServiceError::MissingRequiredData
        | BooksServiceError::InvalidData
        | BooksServiceError::OutOfRange(_) => {
            StatusError::bad_request().brief("Invalid book payload")
        }
        BooksServiceError::Sql(source) => {
            error!("book storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
