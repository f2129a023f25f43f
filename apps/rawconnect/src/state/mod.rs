//! # Application State
//!
//! Per-view state containers and the navigation shell that owns them.
//!
//! ## State Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           AppState                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  view: ActiveView   (exactly one mounted at a time)              │  │
//! │  │                                                                  │  │
//! │  │   Home ───────────── no state                                    │  │
//! │  │   Vendor(..) ─────── VendorDashboardState                        │  │
//! │  │   Supplier(..) ───── SupplierDashboardState                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────┐    ┌──────────────────┐                          │
//! │  │ notifier         │    │ config           │                          │
//! │  │ (toast queue)    │    │ (AppConfig)      │                          │
//! │  └──────────────────┘    └──────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Switching to another tab drops the previous view's state and mounts the
//! new one from the seeded data. Views never share state.

mod supplier;
mod vendor;

pub use supplier::SupplierDashboardState;
pub use vendor::VendorDashboardState;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::notify::Notifier;

// =============================================================================
// Tabs
// =============================================================================

/// Top-level navigation tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Vendor,
    Supplier,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Vendor, Tab::Supplier];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Vendor => "vendor",
            Tab::Supplier => "supplier",
        }
    }

    /// Label shown in the navigation bar.
    pub const fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Vendor => "For Vendors",
            Tab::Supplier => "For Suppliers",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ApiError::parse(format!("Unknown tab: {} (home, vendor, supplier)", s)))
    }
}

/// Who the home page "get started" buttons are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Vendor,
    Supplier,
}

impl Role {
    /// The dashboard each role lands on.
    pub const fn tab(&self) -> Tab {
        match self {
            Role::Vendor => Tab::Vendor,
            Role::Supplier => Tab::Supplier,
        }
    }
}

impl FromStr for Role {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vendor" => Ok(Role::Vendor),
            "supplier" => Ok(Role::Supplier),
            _ => Err(ApiError::parse(format!("Unknown role: {} (vendor, supplier)", s))),
        }
    }
}

// =============================================================================
// Mounted View
// =============================================================================

/// The view currently on screen, with the state it owns.
#[derive(Debug, Clone)]
pub enum ActiveView {
    Home,
    Vendor(VendorDashboardState),
    Supplier(SupplierDashboardState),
}

impl ActiveView {
    /// Mounts a tab on freshly seeded state.
    pub fn mount(tab: Tab) -> Self {
        match tab {
            Tab::Home => ActiveView::Home,
            Tab::Vendor => ActiveView::Vendor(VendorDashboardState::seeded()),
            Tab::Supplier => ActiveView::Supplier(SupplierDashboardState::seeded()),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ActiveView::Home => Tab::Home,
            ActiveView::Vendor(_) => Tab::Vendor,
            ActiveView::Supplier(_) => Tab::Supplier,
        }
    }
}

// =============================================================================
// App State
// =============================================================================

/// Root state of the console session.
#[derive(Debug)]
pub struct AppState {
    view: ActiveView,
    pub notifier: Notifier,
    pub config: AppConfig,
}

impl AppState {
    /// Starts on the home tab.
    pub fn new(config: AppConfig) -> Self {
        AppState {
            view: ActiveView::Home,
            notifier: Notifier::new(),
            config,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.view.tab()
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    /// Selects a tab. Returns whether a new view was mounted.
    ///
    /// Re-selecting the active tab keeps its state.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if self.view.tab() == tab {
            return false;
        }

        info!(from = %self.view.tab(), to = %tab, "Switching tab");
        self.view = ActiveView::mount(tab);
        true
    }

    pub fn vendor(&self) -> Result<&VendorDashboardState, ApiError> {
        match &self.view {
            ActiveView::Vendor(state) => Ok(state),
            _ => Err(ApiError::view_not_active(Tab::Vendor.as_str())),
        }
    }

    pub fn vendor_mut(&mut self) -> Result<&mut VendorDashboardState, ApiError> {
        match &mut self.view {
            ActiveView::Vendor(state) => Ok(state),
            _ => Err(ApiError::view_not_active(Tab::Vendor.as_str())),
        }
    }

    pub fn supplier(&self) -> Result<&SupplierDashboardState, ApiError> {
        match &self.view {
            ActiveView::Supplier(state) => Ok(state),
            _ => Err(ApiError::view_not_active(Tab::Supplier.as_str())),
        }
    }

    pub fn supplier_mut(&mut self) -> Result<&mut SupplierDashboardState, ApiError> {
        match &mut self.view {
            ActiveView::Supplier(state) => Ok(state),
            _ => Err(ApiError::view_not_active(Tab::Supplier.as_str())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rawconnect_core::SupplierId;

    #[test]
    fn test_starts_on_home() {
        let state = AppState::default();
        assert_eq!(state.active_tab(), Tab::Home);
        assert!(matches!(state.view(), ActiveView::Home));
    }

    #[test]
    fn test_reselecting_tab_keeps_state() {
        let mut state = AppState::default();
        assert!(state.switch_tab(Tab::Vendor));
        state.vendor_mut().unwrap().favorites.toggle(SupplierId(1));

        assert!(!state.switch_tab(Tab::Vendor));
        assert!(state.vendor().unwrap().favorites.contains(SupplierId(1)));
    }

    #[test]
    fn test_switching_away_resets_view() {
        let mut state = AppState::default();
        state.switch_tab(Tab::Vendor);
        state.vendor_mut().unwrap().search = "spice".to_string();

        state.switch_tab(Tab::Home);
        state.switch_tab(Tab::Vendor);
        assert_eq!(state.vendor().unwrap().search, "");
    }

    #[test]
    fn test_inactive_view_is_rejected() {
        let mut state = AppState::default();
        let err = state.supplier_mut().unwrap_err();
        assert_eq!(err.code, ErrorCode::ViewNotActive);

        state.switch_tab(Tab::Supplier);
        assert!(state.supplier().is_ok());
        assert_eq!(state.vendor().unwrap_err().code, ErrorCode::ViewNotActive);
    }

    #[test]
    fn test_tab_and_role_parsing() {
        assert_eq!("Vendor".parse::<Tab>().unwrap(), Tab::Vendor);
        assert!("orders".parse::<Tab>().is_err());
        assert_eq!("supplier".parse::<Role>().unwrap().tab(), Tab::Supplier);
        assert!("home".parse::<Role>().is_err());
    }
}
