//! # Supplier Commands
//!
//! Catalog, orders and the add-product dialog on the supplier dashboard.
//!
//! ## Add Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dialog open ──► set name/price/stock/... ──► submit                   │
//! │                                                  │                      │
//! │                           ┌──────────────────────┴─────────┐            │
//! │                           ▼                                ▼            │
//! │                    form rejected                     form accepted      │
//! │                    ┌───────────────────┐          ┌──────────────────┐  │
//! │                    │ "Error" toast     │          │ product appended │  │
//! │                    │ catalog unchanged │          │ "Product Added"  │  │
//! │                    │ form kept as-is   │          │ form reset       │  │
//! │                    │ dialog stays open │          │ dialog closed    │  │
//! │                    └───────────────────┘          └──────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rawconnect_core::catalog::FormField;
use rawconnect_core::{
    DashboardStats, Money, Order, OrderId, OrderLine, OrderStatus, Product, ProductForm,
    StatusTone, Unit,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::notify::Notification;
use crate::state::{AppState, SupplierDashboardState};

// =============================================================================
// Views
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    #[serde(flatten)]
    pub stats: DashboardStats,
    /// e.g. "₹45,600"
    pub monthly_revenue_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineView {
    #[serde(flatten)]
    pub line: OrderLine,
    pub subtotal: Money,
}

/// The forward button offered on an order row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub label: &'static str,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: OrderId,
    pub vendor: String,
    pub items: Vec<OrderLineView>,
    pub total: Money,
    pub status: OrderStatus,
    pub tone: StatusTone,
    pub order_date: String,
    pub delivery_date: String,
    pub next_action: Option<NextAction>,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            id: order.id.clone(),
            vendor: order.vendor.clone(),
            items: order
                .items
                .iter()
                .map(|line| OrderLineView {
                    line: line.clone(),
                    subtotal: line.line_total(),
                })
                .collect(),
            total: order.total,
            status: order.status,
            tone: order.status.tone(),
            order_date: order.order_date.clone(),
            delivery_date: order.delivery_date.clone(),
            next_action: order
                .status
                .next()
                .zip(order.status.next_action_label())
                .map(|(status, label)| NextAction { label, status }),
        }
    }
}

/// Add-product dialog state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub open: bool,
    pub values: ProductForm,
    pub units: Vec<Unit>,
}

impl From<&SupplierDashboardState> for FormView {
    fn from(state: &SupplierDashboardState) -> Self {
        FormView {
            open: state.dialog_open,
            values: state.form.clone(),
            units: Unit::ALL.to_vec(),
        }
    }
}

/// Snapshot of the supplier dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDashboardView {
    pub stats: StatsView,
    pub products: Vec<ProductRow>,
    pub orders: Vec<OrderRow>,
    pub form: FormView,
}

impl From<&SupplierDashboardState> for SupplierDashboardView {
    fn from(state: &SupplierDashboardState) -> Self {
        SupplierDashboardView {
            stats: StatsView {
                stats: state.stats.clone(),
                monthly_revenue_label: state.stats.monthly_revenue.grouped(),
            },
            products: state
                .catalog
                .products()
                .iter()
                .map(|p| ProductRow {
                    product: p.clone(),
                    tone: p.status.tone(),
                })
                .collect(),
            orders: state.orders.orders().iter().map(OrderRow::from).collect(),
            form: FormView::from(state),
        }
    }
}

/// Result of an order status change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub order_id: String,
    /// `None` when no order has this id.
    pub order: Option<OrderRow>,
}

// =============================================================================
// Commands
// =============================================================================

pub fn show_supplier(app: &AppState) -> Result<SupplierDashboardView, ApiError> {
    Ok(SupplierDashboardView::from(app.supplier()?))
}

pub fn set_dialog(app: &mut AppState, open: bool) -> Result<FormView, ApiError> {
    debug!(open, "set_dialog command");
    let state = app.supplier_mut()?;
    state.dialog_open = open;
    Ok(FormView::from(&*state))
}

/// Types into one input of the add-product form.
pub fn set_field(app: &mut AppState, field: FormField, value: &str) -> Result<FormView, ApiError> {
    debug!(field = field.as_str(), value = %value, "set_field command");
    let state = app.supplier_mut()?;
    state.form.set(field, value)?;
    Ok(FormView::from(&*state))
}

/// Submits the add-product form.
///
/// ## Behavior
/// - Name, price and stock are required
/// - Price and stock must be non-negative whole numbers
/// - On rejection an error toast is raised and nothing else changes
/// - On success the form is reset and the dialog closed
pub fn add_product(app: &mut AppState) -> Result<Product, ApiError> {
    debug!("add_product command");
    let state = app.supplier_mut()?;

    let product = match state.catalog.add(&state.form).cloned() {
        Ok(product) => product,
        Err(err) => {
            warn!(error = %err, "Product rejected");
            app.notifier.push(Notification::error(err.to_string()));
            return Err(err.into());
        }
    };

    state.form.reset();
    state.dialog_open = false;

    info!(id = %product.id, name = %product.name, "Product added");
    app.notifier.push(Notification::info(
        "Product Added",
        format!("{} has been added to your inventory", product.name),
    ));

    Ok(product)
}

/// Sets an order's status.
///
/// Any status may be set, including backwards. An unknown id changes
/// nothing and raises no toast.
pub fn advance_order(
    app: &mut AppState,
    order_id: &str,
    status: OrderStatus,
) -> Result<OrderUpdate, ApiError> {
    debug!(order_id = %order_id, status = %status, "advance_order command");
    let state = app.supplier_mut()?;

    let order = state.orders.update_status(order_id, status).map(OrderRow::from);

    match &order {
        Some(row) => {
            info!(order_id = %row.id, status = %row.status, "Order updated");
            app.notifier.push(Notification::info(
                "Order Updated",
                format!("Order {} status updated to {}", row.id, row.status),
            ));
        }
        None => debug!(order_id = %order_id, "No such order, ignoring"),
    }

    Ok(OrderUpdate {
        order_id: order_id.to_string(),
        order,
    })
}
