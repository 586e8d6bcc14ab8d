//! Wishlist Errors

use salvo::http::StatusError;
use tracing::error;

use booknest_app::domain::wishlists::WishlistsServiceError;

pub(crate) fn into_status_error(error: WishlistsServiceError) -> StatusError {
    match error {
        WishlistsServiceError::InvalidReference => StatusError::bad_request().brief("Unknown book"),
        WishlistsServiceError::Sql(source) => {
            error!("wishlist storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
