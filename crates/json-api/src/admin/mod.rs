//! Admin

pub(crate) mod stats;
pub(crate) mod users;
