//! Order Handlers

pub(crate) mod index;
pub(crate) mod mine;
pub(crate) mod place;
pub(crate) mod update_status;
