//! In-browser shopping cart.
//!
//! An ordered sequence of line items, deduplicated by product identifier:
//! adding a product that is already in the cart increments its quantity
//! instead of appending a second line. Every mutation is followed by a full
//! overwrite of the persisted value, so a reload reproduces the same
//! (product, quantity) pairs in first-added order.

use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::storage::{Storage, keys};

/// A cart entry: a product plus a positive quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

/// The cart: insertion-ordered line items mirrored to storage on every
/// mutation.
///
/// Invariant: at most one line per product identifier.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Load the persisted cart.
    ///
    /// Absent value yields an empty cart. A value that does not deserialize
    /// fails closed to an empty cart with a warning; stored content is
    /// untrusted and must never abort initialization.
    #[must_use]
    pub fn load(storage: &dyn Storage) -> Self {
        let Some(raw) = storage.get(keys::CART) else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<CartLine>>(&raw) {
            Ok(lines) => Self { lines },
            Err(e) => {
                tracing::warn!(error = %e, "persisted cart is malformed, starting empty");
                Self::default()
            }
        }
    }

    /// Add a product to the cart.
    ///
    /// Increments the existing line's quantity if the product is already
    /// present, otherwise appends a new line with quantity 1. The full cart
    /// is persisted afterwards. Total and synchronous; no error conditions.
    pub fn add_product(&mut self, product: Product, storage: &mut dyn Storage) {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        self.persist(storage);
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The line items in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Serialize the full cart and overwrite the persisted value.
    ///
    /// Unconditional full overwrite: no merge, last write wins.
    pub fn persist(&self, storage: &mut dyn Storage) {
        match serde_json::to_string(&self.lines) {
            Ok(json) => storage.set(keys::CART, &json),
            // Plain data never fails to serialize; log rather than lose the UI.
            Err(e) => tracing::error!(error = %e, "failed to serialize cart"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use driftline_core::{CurrencyCode, Price, ProductId};

    use crate::storage::MemoryStorage;

    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_owned(),
            description: format!("{name} description"),
            price: Price::from_cents(1900, CurrencyCode::USD),
            image_url: "/images/test.webp".to_owned(),
            badge: None,
            category: "Living".to_owned(),
        }
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let mut storage = MemoryStorage::new();
        let mut cart = CartStore::default();
        let mug = product("Tidewater Mug");

        cart.add_product(mug.clone(), &mut storage);
        cart.add_product(mug, &mut storage);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_distinct_products_keep_insertion_order() {
        let mut storage = MemoryStorage::new();
        let mut cart = CartStore::default();
        let mug = product("Tidewater Mug");
        let board = product("Driftwood Serving Board");

        cart.add_product(mug.clone(), &mut storage);
        cart.add_product(board.clone(), &mut storage);
        cart.add_product(mug.clone(), &mut storage);

        let names: Vec<_> = cart.lines().iter().map(|l| l.product.name.as_str()).collect();
        assert_eq!(names, ["Tidewater Mug", "Driftwood Serving Board"]);
    }

    #[test]
    fn test_total_item_count() {
        let mut storage = MemoryStorage::new();
        let mut cart = CartStore::default();
        assert_eq!(cart.total_item_count(), 0);

        let mug = product("Tidewater Mug");
        cart.add_product(mug.clone(), &mut storage);
        cart.add_product(mug, &mut storage);
        cart.add_product(product("Saltair Candle"), &mut storage);

        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let mut storage = MemoryStorage::new();
        let mut cart = CartStore::default();
        let mug = product("Tidewater Mug");
        let board = product("Driftwood Serving Board");

        cart.add_product(mug.clone(), &mut storage);
        cart.add_product(board.clone(), &mut storage);
        cart.add_product(mug.clone(), &mut storage);

        // Simulates a process restart against the same storage.
        let reloaded = CartStore::load(&storage);
        let pairs: Vec<_> = reloaded
            .lines()
            .iter()
            .map(|l| (l.product.id, l.quantity))
            .collect();
        assert_eq!(pairs, [(mug.id, 2), (board.id, 1)]);
    }

    #[test]
    fn test_load_absent_yields_empty() {
        let storage = MemoryStorage::new();
        let cart = CartStore::load(&storage);
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_load_corrupt_value_fails_closed() {
        let storage = MemoryStorage::seeded([(keys::CART, "{not json")]);
        let cart = CartStore::load(&storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_fails_closed() {
        let storage = MemoryStorage::seeded([(keys::CART, r#"{"quantity": 1}"#)]);
        let cart = CartStore::load(&storage);
        assert!(cart.is_empty());
    }
}
