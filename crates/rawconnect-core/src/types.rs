//! # Domain Types
//!
//! Core domain types used throughout RawConnect.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Supplier side                        Vendor side                       │
//! │  ─────────────                        ───────────                       │
//! │  ┌─────────────────┐                  ┌─────────────────┐               │
//! │  │    Product      │                  │    Supplier     │               │
//! │  │  id (sequential)│                  │  id             │               │
//! │  │  price, unit    │                  │  location       │               │
//! │  │  stock, status  │                  │  offers[]  ─────┼──► Offer      │
//! │  └─────────────────┘                  └─────────────────┘   price       │
//! │  ┌─────────────────┐                                        original    │
//! │  │     Order       │                                                    │
//! │  │  id ("ORD001")  │   Order ↔ Product and Order ↔ vendor are          │
//! │  │  items[] ───────┼─► OrderLine   free text, never foreign keys.      │
//! │  │  total, status  │   (name, qty, price)                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Enum values serialize in `snake_case` so they read exactly like the
//! status strings shown in the dashboards (`pending`, `low_stock`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::money::{discount_percent, Money};

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog product identifier, assigned sequentially from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supplier identifier in the vendor-side directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct SupplierId(pub u32);

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order identifier such as `ORD001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        OrderId(s.to_string())
    }
}

// =============================================================================
// Unit of Measure
// =============================================================================

/// How a product is measured and priced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Unit {
    /// Weight.
    #[default]
    Kg,
    /// Volume.
    Liter,
    Piece,
    Packet,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Kg, Unit::Liter, Unit::Piece, Unit::Packet];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Liter => "liter",
            Unit::Piece => "piece",
            Unit::Packet => "packet",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "liter" | "litre" | "l" => Ok(Unit::Liter),
            "piece" | "pc" => Ok(Unit::Piece),
            "packet" => Ok(Unit::Packet),
            _ => Err(ValidationError::NotAllowed {
                field: "unit".to_string(),
                allowed: Unit::ALL.iter().map(|u| u.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Status Tone
// =============================================================================

/// Display category a status badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusTone {
    Warn,
    Success,
    Primary,
    Destructive,
    Neutral,
}

/// Maps any status string to its badge tone.
///
/// ```text
///   pending   → warn         confirmed → success
///   delivered → primary      low_stock → destructive
///   anything else → neutral
/// ```
pub fn status_tone(status: &str) -> StatusTone {
    match status {
        "pending" => StatusTone::Warn,
        "confirmed" => StatusTone::Success,
        "delivered" => StatusTone::Primary,
        "low_stock" => StatusTone::Destructive,
        _ => StatusTone::Neutral,
    }
}

// =============================================================================
// Product
// =============================================================================

/// Stock status of a catalog product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProductStatus {
    #[default]
    Active,
    LowStock,
}

impl ProductStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::LowStock => "low_stock",
        }
    }

    pub fn tone(&self) -> StatusTone {
        status_tone(self.as_str())
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the supplier's catalog.
///
/// Never mutated after it is added: `status` is not recomputed from
/// `stock`, and `orders` only reflects seeded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-text category ("Vegetables", "spices", ...).
    pub category: String,
    /// Price per `unit`.
    pub price: Money,
    pub unit: Unit,
    pub stock: i64,
    /// Cumulative number of orders that included this product.
    pub orders: u32,
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// Fulfilment status of an order.
///
/// ```text
///   ┌─────────┐  Confirm   ┌───────────┐  Mark Delivered  ┌───────────┐
///   │ pending │ ─────────► │ confirmed │ ───────────────► │ delivered │
///   └─────────┘            └───────────┘                  └───────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// The forward step the dashboard offers, if any.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Button label for the offered forward step.
    pub const fn next_action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Confirm"),
            OrderStatus::Confirmed => Some("Mark Delivered"),
            OrderStatus::Delivered => None,
        }
    }

    pub fn tone(&self) -> StatusTone {
        status_tone(self.as_str())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// One line of an order. Denormalized: no link to a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
    /// Unit price at the time of ordering.
    pub price: Money,
}

impl OrderLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// A vendor's order placed with this supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: OrderId,
    /// Vendor business name, free text.
    pub vendor: String,
    pub items: Vec<OrderLine>,
    /// Supplied by whoever built the order; never recomputed.
    pub total: Money,
    pub status: OrderStatus,
    /// Opaque date string, not parsed.
    pub order_date: String,
    /// Opaque date string, not parsed.
    pub delivery_date: String,
}

impl Order {
    /// Sum of the line totals.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderLine::line_total).sum()
    }

    /// Whether `total` agrees with the line items.
    ///
    /// Diagnostic only. Nothing rejects or repairs a drifting total.
    pub fn is_total_consistent(&self) -> bool {
        self.total == self.items_total()
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A product line a supplier lists for vendors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Offer {
    pub name: String,
    pub price: Money,
    pub unit: Unit,
    pub original_price: Money,
}

impl Offer {
    /// Whole-percent discount against the original price.
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.original_price, self.price)
    }
}

/// A raw-material supplier as vendors see it. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    /// Free-text location, e.g. "Chandni Chowk, Delhi".
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub verified: bool,
    pub products: Vec<Offer>,
    /// Lead-time descriptor, e.g. "Same day".
    pub delivery: String,
    pub min_order: u32,
}

impl Supplier {
    pub fn offer(&self, index: usize) -> Option<&Offer> {
        self.products.get(index)
    }
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// Headline numbers on the supplier dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    pub total_orders: u32,
    pub monthly_revenue: Money,
    pub active_products: u32,
    pub customer_rating: f64,
    pub review_count: u32,
}
