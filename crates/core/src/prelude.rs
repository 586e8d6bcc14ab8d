//! Prelude

pub use crate::{
    books::{Book, BookId, CatalogError, load_catalog},
    cart::{Cart, CartItem},
    orders::{Order, OrderId, OrderStatus},
    pricing::{CartTotals, PricedLine, format_money, tax_rate},
    receipt::{ReceiptLine, render_receipt},
    storage::{FileStorage, MemoryStorage, StateStorage, StorageError, StorageKey},
    store::{AppState, Store, StoreError},
    users::{Role, User, UserId},
    wishlist::Wishlist,
};
