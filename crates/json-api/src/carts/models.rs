//! Cart response models

use booknest::pricing::format_money;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use booknest_app::domain::carts::models::{Cart, CartItem};

use crate::books::BookResponse;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// The lines in the cart, oldest first
    pub items: Vec<CartItemResponse>,

    /// Sum of line totals, in dollars
    pub subtotal: String,

    /// Sales tax on the subtotal
    pub tax: String,

    /// Subtotal plus tax
    pub total: String,

    /// The total formatted for display, e.g. `$47.27`
    pub formatted_total: String,

    /// Copies across all lines
    pub item_count: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let totals = cart.totals;

        CartResponse {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            subtotal: totals.subtotal.to_string(),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
            formatted_total: format_money(totals.total),
            item_count: totals.item_count,
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// The book on this line, at its current catalog price
    pub book: BookResponse,

    pub quantity: u32,

    /// The date and time the book was first added
    pub added_at: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            book: item.book.into(),
            quantity: item.quantity,
            added_at: item.added_at.to_string(),
        }
    }
}
