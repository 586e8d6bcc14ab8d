//! Wishlist

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::books::BookId;

/// Unordered set of wished-for books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist(FxHashSet<BookId>);

impl Wishlist {
    /// Add `book` when absent, remove it when present.
    ///
    /// Returns `true` when the book is on the wishlist afterwards.
    pub fn toggle(&mut self, book: BookId) -> bool {
        if self.0.remove(&book) {
            false
        } else {
            self.0.insert(book)
        }
    }

    /// Whether `book` is on the wishlist.
    #[must_use]
    pub fn contains(&self, book: BookId) -> bool {
        self.0.contains(&book)
    }

    /// Number of books on the wishlist.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over wished-for books in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = BookId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<BookId> for Wishlist {
    fn from_iter<T: IntoIterator<Item = BookId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let book = BookId::new();
        let mut wishlist = Wishlist::default();

        assert!(wishlist.toggle(book), "first toggle adds");
        assert!(wishlist.contains(book));
        assert!(!wishlist.toggle(book), "second toggle removes");
        assert!(wishlist.is_empty());
    }

    #[test]
    fn double_toggle_restores_original_set() {
        let kept = BookId::new();
        let toggled = BookId::new();
        let mut wishlist: Wishlist = [kept].into_iter().collect();
        let original = wishlist.clone();

        wishlist.toggle(toggled);
        wishlist.toggle(toggled);

        assert_eq!(wishlist, original);
    }
}
