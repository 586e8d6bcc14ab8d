//! Cart

use serde::{Deserialize, Serialize};

use crate::{
    books::{Book, BookId},
    pricing::{self, CartTotals, PricedLine},
};

/// A book in the cart along with how many copies are wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the book when it was added.
    #[serde(flatten)]
    pub book: Book,

    /// Number of copies; never zero while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// A single copy of `book`.
    #[must_use]
    pub fn new(book: Book) -> Self {
        Self { book, quantity: 1 }
    }
}

impl PricedLine for CartItem {
    fn unit_price(&self) -> u64 {
        self.book.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered cart lines, in the order books were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Build a cart from existing lines, dropping any with zero quantity.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        Self {
            items: items.into_iter().filter(|item| item.quantity > 0).collect(),
        }
    }

    /// Cart lines.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Line for the given book, if present.
    #[must_use]
    pub fn get(&self, book: BookId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.book.id == book)
    }

    /// Add one copy of `book`.
    ///
    /// An existing line keeps its position and gains one copy; otherwise a new
    /// line with quantity 1 is appended.
    pub fn add(&mut self, book: Book) {
        match self.items.iter_mut().find(|item| item.book.id == book.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(book)),
        }
    }

    /// Set the quantity for `book`. Anything below 1 removes the line.
    ///
    /// Returns `false` when the book is not in the cart.
    pub fn update_quantity(&mut self, book: BookId, quantity: i64) -> bool {
        let Ok(quantity) = u32::try_from(quantity) else {
            return if quantity < 1 {
                self.remove(book)
            } else {
                self.set_quantity(book, u32::MAX)
            };
        };

        if quantity == 0 {
            return self.remove(book);
        }

        self.set_quantity(book, quantity)
    }

    fn set_quantity(&mut self, book: BookId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.book.id == book) {
            Some(item) => {
                item.quantity = quantity;

                true
            }
            None => false,
        }
    }

    /// Drop the line for `book`. Removing an absent book is a no-op.
    pub fn remove(&mut self, book: BookId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.book.id != book);

        self.items.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take the lines out, leaving the cart empty.
    pub fn take(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    /// Total number of copies across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Subtotal, tax and total for the cart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        pricing::totals(&self.items)
    }
}
