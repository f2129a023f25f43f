//! # Cart and Favorites
//!
//! Vendor-side purchase intents and bookmarked suppliers.
//!
//! ## Cart Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Click "Add" on Turmeric Powder (Spice Master)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  entries.push({ supplier, product, quantity: 1 })                      │
//! │                                                                         │
//! │  Click "Add" again on the same offer                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  entries.push({ supplier, product, quantity: 1 })   ← second entry     │
//! │                                                                         │
//! │  No merging, no quantity editing, no removal.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries keep a copy of the supplier and offer as they were when added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::types::{Offer, Supplier, SupplierId};

// =============================================================================
// Cart
// =============================================================================

/// One "Add" click on the vendor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    pub supplier: Supplier,
    pub product: Offer,
    /// Always 1.
    pub quantity: i64,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

/// The vendor's cart. Append-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a new entry with quantity 1 and returns it.
    pub fn add(&mut self, supplier: &Supplier, product: &Offer) -> &CartEntry {
        let index = self.entries.len();
        self.entries.push(CartEntry {
            supplier: supplier.clone(),
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        });
        &self.entries[index]
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries, as shown on the "Cart (n)" button.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Favorites
// =============================================================================

/// Supplier ids the vendor has hearted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: BTreeSet<SupplierId>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Adds the id if absent, removes it if present.
    ///
    /// Returns `true` when the supplier is a favorite afterwards.
    pub fn toggle(&mut self, id: SupplierId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: SupplierId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = SupplierId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_add_same_offer_twice_gives_two_entries() {
        let suppliers = fixtures::suppliers();
        let spice = &suppliers[1];
        let turmeric = &spice.products[0];

        let mut cart = Cart::new();
        cart.add(spice, turmeric);
        cart.add(spice, turmeric);

        assert_eq!(cart.len(), 2);
        for entry in cart.entries() {
            assert_eq!(entry.quantity, 1);
            assert_eq!(entry.product.name, "Turmeric Powder");
            assert_eq!(entry.supplier.name, "Spice Master");
        }
    }

    #[test]
    fn test_toggle_favorite() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(SupplierId(2)));
        assert!(favorites.contains(SupplierId(2)));

        assert!(!favorites.toggle(SupplierId(2)));
        assert!(!favorites.contains(SupplierId(2)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_set() {
        let mut favorites = Favorites::new();
        favorites.toggle(SupplierId(1));
        favorites.toggle(SupplierId(3));
        let before = favorites.clone();

        favorites.toggle(SupplierId(3));
        favorites.toggle(SupplierId(3));
        assert_eq!(favorites, before);

        favorites.toggle(SupplierId(2));
        favorites.toggle(SupplierId(2));
        assert_eq!(favorites, before);
        assert_eq!(
            favorites.ids().collect::<Vec<_>>(),
            vec![SupplierId(1), SupplierId(3)]
        );
    }
}
