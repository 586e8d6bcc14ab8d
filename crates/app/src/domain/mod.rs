//! BookNest Domain Concerns

pub mod books;
pub mod carts;
pub mod orders;
pub mod stats;
pub mod users;
pub mod wishlists;
