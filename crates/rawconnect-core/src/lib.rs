//! # rawconnect-core: Pure Marketplace Logic for RawConnect
//!
//! This crate holds the domain logic of the RawConnect marketplace: the
//! supplier's catalog and order book, the vendor's supplier search, the
//! cart and the favorites set. Everything is in-memory and synchronous.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       RawConnect Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 rawconnect console (apps/rawconnect)            │   │
//! │  │    tab ──► search ──► cart ──► submit ──► advance               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command dispatch                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rawconnect-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ catalog  │ │  orders  │ │  search  │ │   cart   │          │   │
//! │  │   │ Catalog  │ │OrderBook │ │ filter   │ │ Cart     │          │   │
//! │  │   │ Product  │ │  Order   │ │ Supplier │ │Favorites │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • SYNCHRONOUS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, Supplier, statuses)
//! - [`money`] - Whole-rupee money type and discount math
//! - [`error`] - Domain error types
//! - [`validation`] - Add-product form validation and parsing
//! - [`catalog`] - Supplier product catalog
//! - [`orders`] - Supplier order book and status transitions
//! - [`search`] - Vendor-side supplier search
//! - [`cart`] - Vendor cart and favorites
//! - [`fixtures`] - Seeded mock data
//!
//! ## Example Usage
//!
//! ```rust
//! use rawconnect_core::fixtures;
//! use rawconnect_core::search::filter_suppliers;
//!
//! let suppliers = fixtures::suppliers();
//! let hits = filter_suppliers(&suppliers, "chandni");
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Spice Master");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod money;
pub mod orders;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry, Favorites};
pub use catalog::{Catalog, ProductForm};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use orders::OrderBook;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Brand name shown in the navigation bar.
pub const BRAND_NAME: &str = "RawConnect";

/// Currency symbol used when formatting [`Money`].
pub const CURRENCY_SYMBOL: &str = "₹";
