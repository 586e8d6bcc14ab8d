//! Cart Models

use booknest::pricing::{self, CartTotals, PricedLine};
use jiff::Timestamp;

use crate::{
    domain::books::models::{Book, BookUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Cart Model
///
/// A user without a stored cart has an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl Cart {
    /// Build a cart and compute its totals.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let totals = pricing::totals(&items);

        Self { items, totals }
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub book: Book,
    pub quantity: u32,
    pub added_at: Timestamp,
}

impl PricedLine for CartItem {
    fn unit_price(&self) -> u64 {
        self.book.details.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// NewCartItem Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub book: BookUuid,
    /// Copies to add; an existing line grows by this amount.
    pub quantity: u32,
}
