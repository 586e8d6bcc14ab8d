//! Errors

use salvo::http::StatusError;
use tracing::error;

use booknest_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Book is not in the cart"),
        CartsServiceError::InvalidReference => StatusError::bad_request().brief("Unknown book"),
        CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData
        | CartsServiceError::InvalidQuantity(_) => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
