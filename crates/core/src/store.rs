//! Client application state store.
//!
//! [`Store`] owns the in-memory [`AppState`] and a [`StateStorage`] backend.
//! Each mutation saves only the key it touched, and writes happen before the
//! in-memory state changes so a failed save leaves the state as it was.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{
    books::{Book, BookId},
    cart::Cart,
    orders::{Order, OrderId, OrderStatus},
    pricing::{CartTotals, PricedLine, minor_to_decimal},
    storage::{StateStorage, StorageError, StorageKey},
    users::User,
    wishlist::Wishlist,
};

/// Errors returned by [`Store`] mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The order cannot be placed.
    #[error("invalid order: {0}")]
    InvalidOrder(&'static str),

    /// Saving to storage failed; in-memory state is unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Everything the client holds in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Signed-in user, if any
    pub user: Option<User>,

    /// Loaded catalog
    pub books: Vec<Book>,

    /// Cart lines
    pub cart: Cart,

    /// Wished-for books
    pub wishlist: Wishlist,

    /// Orders placed or loaded this session
    pub orders: Vec<Order>,

    /// Dark mode preference
    pub dark_mode: bool,
}

/// Single-owner state store with explicit persistence.
#[derive(Debug)]
pub struct Store<S> {
    state: AppState,
    storage: S,
}

impl<S: StateStorage> Store<S> {
    /// Empty state over `storage`, ignoring anything already saved.
    pub fn new(storage: S) -> Self {
        Self {
            state: AppState::default(),
            storage,
        }
    }

    /// Restore the durable keys from `storage`.
    ///
    /// Missing keys keep their defaults. Entries that cannot be read or decoded
    /// are skipped without affecting the others, and cart lines with a zero
    /// quantity are dropped.
    pub fn restore(storage: S) -> Self {
        let mut state = AppState::default();

        if let Some(user) = load(&storage, StorageKey::User) {
            state.user = Some(user);
        }

        if let Some(cart) = load::<Cart>(&storage, StorageKey::Cart) {
            state.cart = Cart::from_items(cart.items().iter().cloned());
        }

        if let Some(wishlist) = load(&storage, StorageKey::Wishlist) {
            state.wishlist = wishlist;
        }

        if let Some(dark_mode) = load(&storage, StorageKey::DarkMode) {
            state.dark_mode = dark_mode;
        }

        Self { state, storage }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, dropping the in-memory state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Sign `user` in and save them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the user cannot be saved.
    pub fn sign_in(&mut self, user: User) -> Result<(), StoreError> {
        save(&mut self.storage, StorageKey::User, &user)?;

        self.state.user = Some(user);

        Ok(())
    }

    /// Sign out: forget the user, cart and orders, and remove the saved user
    /// and cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if a key cannot be removed.
    pub fn sign_out(&mut self) -> Result<(), StoreError> {
        self.storage.remove(StorageKey::User)?;
        self.storage.remove(StorageKey::Cart)?;

        self.state.user = None;
        self.state.cart.clear();
        self.state.orders.clear();

        Ok(())
    }

    /// Replace the loaded catalog. Not persisted.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.state.books = books;
    }

    /// Add one copy of `book` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the cart cannot be saved.
    pub fn add_to_cart(&mut self, book: Book) -> Result<(), StoreError> {
        let mut cart = self.state.cart.clone();

        cart.add(book);

        self.commit_cart(cart)
    }

    /// Drop `book` from the cart. Absent books are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the cart cannot be saved.
    pub fn remove_from_cart(&mut self, book: BookId) -> Result<(), StoreError> {
        let mut cart = self.state.cart.clone();

        if !cart.remove(book) {
            return Ok(());
        }

        self.commit_cart(cart)
    }

    /// Set the quantity for `book`; anything below 1 removes it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the cart cannot be saved.
    pub fn update_cart_quantity(&mut self, book: BookId, quantity: i64) -> Result<(), StoreError> {
        let mut cart = self.state.cart.clone();

        if !cart.update_quantity(book, quantity) {
            return Ok(());
        }

        self.commit_cart(cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the cart cannot be saved.
    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.commit_cart(Cart::default())
    }

    /// Place an order for the current cart.
    ///
    /// The order snapshots the cart lines, starts `pending`, and is stamped
    /// with the current time. The emptied cart is saved before anything
    /// changes in memory, so a storage failure leaves both the cart and the
    /// order list untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidOrder`] without writing anything when no
    /// user is signed in or the cart is empty, and [`StoreError::Storage`] if
    /// the emptied cart cannot be saved.
    pub fn create_order(
        &mut self,
        shipping_address: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Result<OrderId, StoreError> {
        let Some(user) = &self.state.user else {
            return Err(StoreError::InvalidOrder("no user is signed in"));
        };

        if self.state.cart.is_empty() {
            return Err(StoreError::InvalidOrder("cart is empty"));
        }

        let user = user.id;

        save(&mut self.storage, StorageKey::Cart, &Cart::default())?;

        let totals = self.state.cart.totals();
        let order = Order {
            id: OrderId::new(),
            user,
            items: self.state.cart.take(),
            totals,
            status: OrderStatus::Pending,
            shipping_address: shipping_address.into(),
            payment_method: payment_method.into(),
            placed_at: Timestamp::now(),
        };
        let id = order.id;

        self.state.orders.push(order);

        Ok(id)
    }

    /// Replace the loaded orders. Not persisted.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.state.orders = orders;
    }

    /// Change the status of a loaded order. Returns `false` if it is unknown.
    pub fn update_order_status(&mut self, order: OrderId, status: OrderStatus) -> bool {
        match self.state.orders.iter_mut().find(|o| o.id == order) {
            Some(o) => {
                o.status = status;

                true
            }
            None => false,
        }
    }

    /// Add or remove `book` from the wishlist.
    ///
    /// Returns `true` when the book is wished-for afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the wishlist cannot be saved.
    pub fn toggle_wishlist(&mut self, book: BookId) -> Result<bool, StoreError> {
        let mut wishlist = self.state.wishlist.clone();
        let wished = wishlist.toggle(book);

        self.set_wishlist(wishlist)?;

        Ok(wished)
    }

    /// Replace the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the wishlist cannot be saved.
    pub fn set_wishlist(&mut self, wishlist: Wishlist) -> Result<(), StoreError> {
        save(&mut self.storage, StorageKey::Wishlist, &wishlist)?;

        self.state.wishlist = wishlist;

        Ok(())
    }

    /// Flip the dark mode preference, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the preference cannot be saved.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, StoreError> {
        let dark_mode = !self.state.dark_mode;

        save(&mut self.storage, StorageKey::DarkMode, &dark_mode)?;

        self.state.dark_mode = dark_mode;

        Ok(dark_mode)
    }

    /// Cart subtotal before tax.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        minor_to_decimal(
            self.state
                .cart
                .items()
                .iter()
                .map(PricedLine::line_total)
                .fold(0, u64::saturating_add),
        )
    }

    /// Subtotal, tax and total for the cart.
    #[must_use]
    pub fn cart_totals(&self) -> CartTotals {
        self.state.cart.totals()
    }

    /// Number of copies in the cart.
    #[must_use]
    pub fn cart_items_count(&self) -> u64 {
        self.state.cart.item_count()
    }

    fn commit_cart(&mut self, cart: Cart) -> Result<(), StoreError> {
        save(&mut self.storage, StorageKey::Cart, &cart)?;

        self.state.cart = cart;

        Ok(())
    }
}

fn load<T: DeserializeOwned>(storage: &impl StateStorage, key: StorageKey) -> Option<T> {
    let raw = storage.read(key).ok()??;

    serde_json::from_str(&raw).ok()
}

fn save<T: Serialize>(
    storage: &mut impl StateStorage,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Json { key, source })?;

    storage.write(key, &json)
}
