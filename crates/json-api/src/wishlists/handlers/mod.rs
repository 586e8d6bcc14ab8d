//! Wishlist Handlers

pub(crate) mod get;
pub(crate) mod toggle;
