//! BookNest
//!
//! Cart, order and wishlist domain logic for the BookNest bookstore, plus the
//! client application state store that persists its durable subset explicitly.

pub mod books;
pub mod cart;
pub mod orders;
pub mod pricing;
pub mod receipt;
pub mod storage;
pub mod store;
pub mod users;
pub mod wishlist;

pub mod prelude;
