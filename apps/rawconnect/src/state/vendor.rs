//! # Vendor Dashboard State
//!
//! Browse, cart and favorites state of the vendor dashboard.
//!
//! ## Derived List
//! The visible suppliers are never stored. They are recomputed from the
//! directory and the current search text every time they are read, so
//! they can't go stale.

use rawconnect_core::search::{filter_suppliers, CategoryFilter};
use rawconnect_core::{fixtures, Cart, CoreError, CoreResult, Favorites, Offer, Supplier, SupplierId};

#[derive(Debug, Clone)]
pub struct VendorDashboardState {
    suppliers: Vec<Supplier>,
    /// Search box text, as typed.
    pub search: String,
    /// Category select. Kept for display, not used when filtering.
    pub category: CategoryFilter,
    pub cart: Cart,
    pub favorites: Favorites,
}

impl VendorDashboardState {
    /// Fresh dashboard on the seeded supplier directory.
    pub fn seeded() -> Self {
        VendorDashboardState::with_suppliers(fixtures::suppliers())
    }

    pub fn with_suppliers(suppliers: Vec<Supplier>) -> Self {
        VendorDashboardState {
            suppliers,
            search: String::new(),
            category: CategoryFilter::All,
            cart: Cart::new(),
            favorites: Favorites::new(),
        }
    }

    /// Suppliers matching the current search text, in directory order.
    pub fn visible_suppliers(&self) -> Vec<&Supplier> {
        filter_suppliers(&self.suppliers, &self.search)
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn supplier(&self, id: SupplierId) -> CoreResult<&Supplier> {
        self.suppliers
            .iter()
            .find(|s| s.id == id)
            .ok_or(CoreError::SupplierNotFound(id.0))
    }

    /// Looks up an offer by supplier id and its position in the supplier's list.
    pub fn offer(&self, id: SupplierId, index: usize) -> CoreResult<(&Supplier, &Offer)> {
        let supplier = self.supplier(id)?;
        let offer = supplier.offer(index).ok_or(CoreError::OfferNotFound {
            supplier_id: id.0,
            index,
        })?;
        Ok((supplier, offer))
    }
}

impl Default for VendorDashboardState {
    fn default() -> Self {
        Self::seeded()
    }
}
