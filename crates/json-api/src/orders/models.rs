//! Order response models

use booknest::pricing::{format_money, minor_to_decimal};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booknest_app::domain::orders::models::{Order, OrderItem};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub id: Uuid,

    /// The customer who placed it
    pub user_id: Uuid,

    /// Lines as they were when the order was placed
    pub items: Vec<OrderItemResponse>,

    pub subtotal: String,

    pub tax: String,

    pub total: String,

    /// The total formatted for display
    pub formatted_total: String,

    /// Copies across all lines
    pub item_count: u64,

    /// `pending`, `confirmed`, `shipped`, `delivered` or `cancelled`
    pub status: String,

    pub shipping_address: String,

    pub payment_method: String,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the status last changed
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.uuid.into(),
            user_id: order.user.into(),
            item_count: order.item_count(),
            formatted_total: format_money(order.total),
            subtotal: order.subtotal.to_string(),
            tax: order.tax.to_string(),
            total: order.total.to_string(),
            status: order.status.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub book_id: Uuid,

    pub title: String,

    pub author: String,

    /// Unit price in cents at the time of the order
    pub price: u64,

    pub formatted_price: String,

    pub quantity: u32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            book_id: item.book.into(),
            formatted_price: format_money(minor_to_decimal(item.unit_price)),
            title: item.title,
            author: item.author,
            price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<Order>> for OrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into_iter().map(Into::into).collect(),
        }
    }
}
