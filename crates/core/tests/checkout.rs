//! End-to-end client checkout over the bundled catalog.

use booknest::prelude::*;
use rust_decimal::Decimal;
use testresult::TestResult;

const CATALOG: &str = include_str!("../../../fixtures/catalog.yaml");

fn book<'a>(books: &'a [Book], title: &str) -> Result<&'a Book, String> {
    books
        .iter()
        .find(|book| book.title == title)
        .ok_or_else(|| format!("{title} missing from catalog"))
}

fn shopper() -> User {
    User {
        id: UserId::from_uuid(uuid::Uuid::now_v7()),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::User,
    }
}

#[test]
fn checkout_prices_cart_and_survives_restore() -> TestResult {
    let books = load_catalog(CATALOG)?;
    let gatsby = book(&books, "The Great Gatsby")?.clone();
    let mockingbird = book(&books, "To Kill a Mockingbird")?.clone();

    let mut store = Store::new(MemoryStorage::default());

    store.set_books(books);
    store.sign_in(shopper())?;
    store.add_to_cart(gatsby.clone())?;
    store.add_to_cart(mockingbird.clone())?;
    store.add_to_cart(mockingbird.clone())?;

    let totals = store.cart_totals();

    assert_eq!(totals.subtotal, Decimal::new(4297, 2));
    assert_eq!(totals.total, Decimal::new(47267, 3));
    assert_eq!(store.cart_items_count(), 3);

    store.toggle_wishlist(gatsby.id)?;

    // A reload sees the same cart and wishlist.
    let restored = Store::restore(store.into_storage());

    assert_eq!(restored.cart_totals(), totals);
    assert!(restored.state().wishlist.contains(gatsby.id));
    assert!(restored.state().books.is_empty(), "catalog is not persisted");

    let mut store = restored;
    let order = store.create_order("1 Main St, Springfield", "card")?;

    assert!(store.state().cart.is_empty(), "cart emptied by checkout");

    let placed = store
        .state()
        .orders
        .iter()
        .find(|placed| placed.id == order)
        .ok_or("order missing")?;

    assert_eq!(placed.totals, totals, "order keeps the cart's totals");
    assert_eq!(placed.status, OrderStatus::Pending);

    let restored = Store::restore(store.into_storage());

    assert!(restored.state().cart.is_empty(), "empty cart was saved");

    Ok(())
}

#[test]
fn checkout_without_sign_in_is_refused() -> TestResult {
    let books = load_catalog(CATALOG)?;
    let dune = book(&books, "Dune")?.clone();

    let mut store = Store::new(MemoryStorage::default());

    store.add_to_cart(dune)?;

    let result = store.create_order("1 Main St", "card");

    assert!(
        matches!(result, Err(StoreError::InvalidOrder(_))),
        "expected InvalidOrder, got {result:?}"
    );
    assert_eq!(store.state().cart.len(), 1, "cart untouched");

    Ok(())
}
