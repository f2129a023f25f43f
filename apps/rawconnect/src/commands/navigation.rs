//! # Navigation Commands
//!
//! Tab switching and the home page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RawConnect        [ Home ]  [ For Vendors ]  [ For Suppliers ]        │
//! │                        │            │                  │               │
//! │                   tab home     tab vendor        tab supplier          │
//! │                                     ▲                  ▲               │
//! │  Home page:                         │                  │               │
//! │    [ I'm a Vendor ] ── start vendor ┘                  │               │
//! │    [ I'm a Supplier ] ── start supplier ───────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rawconnect_core::fixtures::{self, HomeContent};
use serde::Serialize;
use tracing::debug;

use crate::state::{AppState, Role, Tab};

/// One entry of the navigation bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabLink {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

/// The navigation bar as currently drawn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavBar {
    pub brand: String,
    pub tabs: Vec<TabLink>,
}

/// Result of selecting a tab.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabChange {
    pub active: Tab,
    /// False when the tab was already active and kept its state.
    pub remounted: bool,
}

/// Snapshot of the home page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub nav: NavBar,
    #[serde(flatten)]
    pub content: HomeContent,
}

pub fn nav_bar(app: &AppState) -> NavBar {
    let active = app.active_tab();
    NavBar {
        brand: app.config.market.name.clone(),
        tabs: Tab::ALL
            .into_iter()
            .map(|tab| TabLink {
                tab,
                label: tab.label(),
                active: tab == active,
            })
            .collect(),
    }
}

pub fn switch_tab(app: &mut AppState, tab: Tab) -> TabChange {
    debug!(tab = %tab, "switch_tab command");
    let remounted = app.switch_tab(tab);
    TabChange {
        active: app.active_tab(),
        remounted,
    }
}

/// Home page "get started" buttons.
pub fn get_started(app: &mut AppState, role: Role) -> TabChange {
    debug!(?role, "get_started command");
    switch_tab(app, role.tab())
}

pub fn show_home(app: &AppState) -> HomeView {
    HomeView {
        nav: nav_bar(app),
        content: fixtures::home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_started_lands_on_dashboard() {
        let mut app = AppState::default();

        let change = get_started(&mut app, Role::Supplier);
        assert_eq!(change.active, Tab::Supplier);
        assert!(change.remounted);
        assert!(app.supplier().is_ok());
    }

    #[test]
    fn test_nav_bar_marks_active_tab() {
        let mut app = AppState::default();
        switch_tab(&mut app, Tab::Vendor);

        let nav = nav_bar(&app);
        assert_eq!(nav.brand, "RawConnect");
        let active: Vec<Tab> = nav.tabs.iter().filter(|t| t.active).map(|t| t.tab).collect();
        assert_eq!(active, vec![Tab::Vendor]);
    }

    #[test]
    fn test_home_snapshot() {
        let app = AppState::default();
        let json = serde_json::to_value(show_home(&app)).unwrap();

        assert_eq!(json["headline"], "Connect with Trusted Raw Material Suppliers");
        assert_eq!(json["highlights"][0], "500+ Vendors");
        assert_eq!(json["nav"]["tabs"][0]["active"], true);
    }
}
