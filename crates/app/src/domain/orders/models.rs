//! Order Models

use booknest::{
    orders::OrderStatus,
    pricing::PricedLine,
    receipt::ReceiptLine,
};
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{books::models::BookUuid, carts::models::CartItem, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// Amounts are fixed when the order is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user: UserUuid,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub shipping_address: String,
    pub payment_method: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Copies across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Lines in the shape the receipt renderer takes.
    #[must_use]
    pub fn receipt_lines(&self) -> Vec<ReceiptLine<'_>> {
        self.items
            .iter()
            .map(|item| ReceiptLine {
                title: &item.title,
                author: &item.author,
                unit_price: item.unit_price,
                quantity: item.quantity,
            })
            .collect()
    }
}

/// OrderItem Model: a frozen copy of a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub book: BookUuid,
    pub title: String,
    pub author: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl PricedLine for OrderItem {
    fn unit_price(&self) -> u64 {
        self.unit_price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            book: item.book.uuid,
            title: item.book.details.title.clone(),
            author: item.book.details.author.clone(),
            unit_price: item.book.details.price,
            quantity: item.quantity,
        }
    }
}

/// New Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub shipping_address: String,
    pub payment_method: String,
}
