//! # Vendor Commands
//!
//! Search, cart and favorites on the vendor dashboard.
//!
//! ## Vendor Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ search: chandni      ]  [ All Categories ▾ ]        [ Cart (2) ]    │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Spice Master  ✓          Chandni Chowk, Delhi           ♡     │    │
//! │  │  ★ 4.9 (203)   Next day   Min order: 5                         │    │
//! │  │    Turmeric Powder   ₹180/kg   ₹220   18% off       [ Add ]    │    │
//! │  │    ...                                                         │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  search <text>  ──► set_search        fav <id>      ──► toggle_favorite │
//! │  category <c>   ──► set_category      cart <id> <n> ──► add_to_cart     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rawconnect_core::search::CategoryFilter;
use rawconnect_core::{CartEntry, Money, Offer, Supplier, SupplierId, Unit};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::notify::Notification;
use crate::state::{AppState, VendorDashboardState};

// =============================================================================
// Views
// =============================================================================

/// An offer line on a supplier card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferView {
    pub index: usize,
    pub name: String,
    pub price: Money,
    pub unit: Unit,
    pub original_price: Money,
    pub discount_percent: i64,
    /// e.g. "₹25/kg"
    pub price_label: String,
}

impl OfferView {
    fn new(index: usize, offer: &Offer) -> Self {
        OfferView {
            index,
            name: offer.name.clone(),
            price: offer.price,
            unit: offer.unit,
            original_price: offer.original_price,
            discount_percent: offer.discount_percent(),
            price_label: format!("{}/{}", offer.price, offer.unit),
        }
    }
}

/// A supplier card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCard {
    pub id: SupplierId,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub verified: bool,
    pub delivery: String,
    pub min_order: u32,
    pub favorite: bool,
    pub offers: Vec<OfferView>,
}

impl SupplierCard {
    fn new(supplier: &Supplier, favorite: bool) -> Self {
        SupplierCard {
            id: supplier.id,
            name: supplier.name.clone(),
            location: supplier.location.clone(),
            rating: supplier.rating,
            reviews: supplier.reviews,
            verified: supplier.verified,
            delivery: supplier.delivery.clone(),
            min_order: supplier.min_order,
            favorite,
            offers: supplier
                .products
                .iter()
                .enumerate()
                .map(|(i, offer)| OfferView::new(i, offer))
                .collect(),
        }
    }
}

/// Snapshot of the vendor dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDashboardView {
    pub search: String,
    pub category: CategoryFilter,
    pub category_label: &'static str,
    pub cart_count: usize,
    pub favorites: Vec<SupplierId>,
    pub suppliers: Vec<SupplierCard>,
}

impl From<&VendorDashboardState> for VendorDashboardView {
    fn from(state: &VendorDashboardState) -> Self {
        VendorDashboardView {
            search: state.search.clone(),
            category: state.category,
            category_label: state.category.label(),
            cart_count: state.cart.len(),
            favorites: state.favorites.ids().collect(),
            suppliers: state
                .visible_suppliers()
                .into_iter()
                .map(|s| SupplierCard::new(s, state.favorites.contains(s.id)))
                .collect(),
        }
    }
}

/// Result of changing the search text or category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub search: String,
    pub category: CategoryFilter,
    /// Ids of the visible suppliers, in directory order.
    pub matches: Vec<SupplierId>,
}

impl From<&VendorDashboardState> for FilterResult {
    fn from(state: &VendorDashboardState) -> Self {
        FilterResult {
            search: state.search.clone(),
            category: state.category,
            matches: state.visible_suppliers().iter().map(|s| s.id).collect(),
        }
    }
}

/// Result of an "Add" click.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAdded {
    pub entry: CartEntry,
    pub cart_count: usize,
}

/// Result of a heart click.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggled {
    pub supplier_id: SupplierId,
    pub favorite: bool,
}

// =============================================================================
// Commands
// =============================================================================

pub fn show_vendor(app: &AppState) -> Result<VendorDashboardView, ApiError> {
    Ok(VendorDashboardView::from(app.vendor()?))
}

/// Replaces the search text. Empty text shows every supplier.
pub fn set_search(app: &mut AppState, term: &str) -> Result<FilterResult, ApiError> {
    debug!(term = %term, "set_search command");
    let state = app.vendor_mut()?;
    state.search = term.to_string();
    Ok(FilterResult::from(&*state))
}

/// Stores the category select. The supplier list does not depend on it.
pub fn set_category(
    app: &mut AppState,
    category: CategoryFilter,
) -> Result<FilterResult, ApiError> {
    debug!(category = %category, "set_category command");
    let state = app.vendor_mut()?;
    state.category = category;
    Ok(FilterResult::from(&*state))
}

/// Appends one unit of an offer to the cart.
///
/// Adding the same offer twice yields two entries.
pub fn add_to_cart(
    app: &mut AppState,
    supplier_id: SupplierId,
    index: usize,
) -> Result<CartAdded, ApiError> {
    debug!(supplier_id = %supplier_id, index, "add_to_cart command");

    let state = app.vendor_mut()?;
    let (supplier, offer) = state.offer(supplier_id, index)?;
    let (supplier, offer) = (supplier.clone(), offer.clone());

    let entry = state.cart.add(&supplier, &offer).clone();
    let cart_count = state.cart.len();

    info!(supplier = %supplier.name, product = %offer.name, cart_count, "Added to cart");
    app.notifier.push(Notification::info(
        "Added to Cart",
        format!("{} from {} added to cart", offer.name, supplier.name),
    ));

    Ok(CartAdded { entry, cart_count })
}

/// Flips the supplier's favorite flag.
pub fn toggle_favorite(
    app: &mut AppState,
    supplier_id: SupplierId,
) -> Result<FavoriteToggled, ApiError> {
    debug!(supplier_id = %supplier_id, "toggle_favorite command");

    let state = app.vendor_mut()?;
    state.supplier(supplier_id)?;
    let favorite = state.favorites.toggle(supplier_id);

    Ok(FavoriteToggled {
        supplier_id,
        favorite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::Tab;

    fn vendor_app() -> AppState {
        let mut app = AppState::default();
        app.switch_tab(Tab::Vendor);
        app
    }

    #[test]
    fn test_search_by_location() {
        let mut app = vendor_app();

        let result = set_search(&mut app, "chandni").unwrap();
        assert_eq!(result.matches, vec![SupplierId(2)]);

        let result = set_search(&mut app, "").unwrap();
        assert_eq!(result.matches.len(), 3);
    }

    #[test]
    fn test_category_is_stored_only() {
        let mut app = vendor_app();

        let result = set_category(&mut app, CategoryFilter::Spices).unwrap();
        assert_eq!(result.category, CategoryFilter::Spices);
        assert_eq!(result.matches.len(), 3);
    }

    #[test]
    fn test_add_to_cart_twice_makes_two_entries() {
        let mut app = vendor_app();

        add_to_cart(&mut app, SupplierId(1), 0).unwrap();
        let added = add_to_cart(&mut app, SupplierId(1), 0).unwrap();
        assert_eq!(added.cart_count, 2);
        assert_eq!(added.entry.quantity, 1);

        let toasts = app.notifier.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, "Added to Cart");
        assert_eq!(
            toasts[0].description,
            "Fresh Tomatoes from Fresh Veggie Hub added to cart"
        );
    }

    #[test]
    fn test_add_unknown_offer_changes_nothing() {
        let mut app = vendor_app();

        let err = add_to_cart(&mut app, SupplierId(2), 7).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(app.vendor().unwrap().cart.is_empty());
        assert!(app.notifier.pending().is_empty());
    }

    #[test]
    fn test_toggle_favorite_twice() {
        let mut app = vendor_app();

        assert!(toggle_favorite(&mut app, SupplierId(3)).unwrap().favorite);
        assert!(!toggle_favorite(&mut app, SupplierId(3)).unwrap().favorite);
        assert!(app.vendor().unwrap().favorites.is_empty());
        assert!(toggle_favorite(&mut app, SupplierId(42)).is_err());
    }

    #[test]
    fn test_snapshot_shows_discounts() {
        let mut app = vendor_app();
        toggle_favorite(&mut app, SupplierId(2)).unwrap();
        set_search(&mut app, "spice").unwrap();

        let view = show_vendor(&app).unwrap();
        assert_eq!(view.suppliers.len(), 1);
        let card = &view.suppliers[0];
        assert!(card.favorite);
        // (220 - 180) / 220 = 18.18%
        assert_eq!(card.offers[0].discount_percent, 18);
        assert_eq!(card.offers[0].price_label, "₹180/kg");
        assert_eq!(view.category_label, "All Categories");
    }

    #[test]
    fn test_requires_vendor_tab() {
        let mut app = AppState::default();
        let err = set_search(&mut app, "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::ViewNotActive);
    }
}
