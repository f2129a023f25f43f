//! # Supplier Dashboard State
//!
//! Everything the supplier dashboard owns while it is mounted.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SupplierDashboardState                                                 │
//! │  ├── stats        (read-only headline numbers)                         │
//! │  ├── catalog      Products list          ◄── submit_product            │
//! │  ├── orders       Recent orders          ◄── advance_order             │
//! │  ├── form         Add-product draft      ◄── set_field                 │
//! │  └── dialog_open  Add-product dialog     ◄── open/close_dialog         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rawconnect_core::{fixtures, Catalog, DashboardStats, OrderBook, ProductForm};

#[derive(Debug, Clone)]
pub struct SupplierDashboardState {
    pub stats: DashboardStats,
    pub catalog: Catalog,
    pub orders: OrderBook,
    pub form: ProductForm,
    pub dialog_open: bool,
}

impl SupplierDashboardState {
    /// Fresh dashboard on the seeded data, dialog closed, form blank.
    pub fn seeded() -> Self {
        SupplierDashboardState {
            stats: fixtures::dashboard_stats(),
            catalog: Catalog::new(fixtures::products()),
            orders: OrderBook::new(fixtures::orders()),
            form: ProductForm::default(),
            dialog_open: false,
        }
    }
}

impl Default for SupplierDashboardState {
    fn default() -> Self {
        Self::seeded()
    }
}
