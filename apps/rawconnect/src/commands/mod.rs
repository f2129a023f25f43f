//! # Console Commands
//!
//! Every user interaction is one console line, parsed into a [`Command`]
//! and run against the [`AppState`].
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Console Commands                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  NAVIGATION (navigation.rs)                                             │
//! │  ├── tab <home|vendor|supplier>     Select a tab                       │
//! │  ├── start <vendor|supplier>        Home "get started" buttons         │
//! │  └── show                           Snapshot of the active view        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  VENDOR (vendor.rs)                                                     │
//! │  ├── search <text>                  Filter suppliers                   │
//! │  ├── category <name>                Category select                    │
//! │  ├── cart <supplier-id> <index>     Add an offer to the cart           │
//! │  └── fav <supplier-id>              Toggle favorite                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  SUPPLIER (supplier.rs)                                                 │
//! │  ├── dialog <open|close>            Add-product dialog                 │
//! │  ├── set <field> <value>            Type into the form                 │
//! │  ├── submit                         Add the product                    │
//! │  └── advance <order-id> <status>    Set an order's status              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod navigation;
pub mod supplier;
pub mod vendor;

use rawconnect_core::catalog::FormField;
use rawconnect_core::search::CategoryFilter;
use rawconnect_core::{OrderStatus, Product, SupplierId};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::{AppState, Role, Tab};

use navigation::{HomeView, TabChange};
use supplier::{FormView, OrderUpdate, SupplierDashboardView};
use vendor::{CartAdded, FavoriteToggled, FilterResult, VendorDashboardView};

/// Usage lines printed by `help`.
pub const HELP: &[&str] = &[
    "tab <home|vendor|supplier>",
    "start <vendor|supplier>",
    "show",
    "search <text>",
    "category <all|vegetables|spices|grains|dairy>",
    "cart <supplier-id> <offer-index>",
    "fav <supplier-id>",
    "dialog <open|close>",
    "set <name|category|price|unit|stock|description> <value>",
    "submit",
    "advance <order-id> <pending|confirmed|delivered>",
    "help",
    "quit",
];

// =============================================================================
// Command
// =============================================================================

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SwitchTab(Tab),
    GetStarted(Role),
    Show,
    Search(String),
    Category(CategoryFilter),
    AddToCart { supplier_id: SupplierId, index: usize },
    ToggleFavorite(SupplierId),
    Dialog { open: bool },
    SetField { field: FormField, value: String },
    Submit,
    AdvanceOrder { order_id: String, status: OrderStatus },
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "tab" => Command::SwitchTab(rest.parse()?),
            "start" => Command::GetStarted(rest.parse()?),
            "show" => Command::Show,
            "search" => Command::Search(rest.to_string()),
            "category" => Command::Category(rest.parse()?),
            "cart" => {
                let [supplier, index] = args::<2>(word, rest)?;
                Command::AddToCart {
                    supplier_id: SupplierId(number(supplier)?),
                    index: number(index)?,
                }
            }
            "fav" => {
                let [supplier] = args::<1>(word, rest)?;
                Command::ToggleFavorite(SupplierId(number(supplier)?))
            }
            "dialog" => match rest.to_lowercase().as_str() {
                "open" => Command::Dialog { open: true },
                "close" => Command::Dialog { open: false },
                _ => return Err(ApiError::parse("Usage: dialog <open|close>")),
            },
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim_start()),
                    None => (rest, ""),
                };
                Command::SetField {
                    field: field.parse()?,
                    value: value.to_string(),
                }
            }
            "submit" => Command::Submit,
            "advance" => {
                let [order_id, status] = args::<2>(word, rest)?;
                Command::AdvanceOrder {
                    order_id: order_id.to_string(),
                    status: status.parse()?,
                }
            }
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::parse(format!(
                    "Unknown command: {} (try 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Splits `rest` into exactly `N` whitespace-separated arguments.
fn args<'a, const N: usize>(word: &str, rest: &'a str) -> Result<[&'a str; N], ApiError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    parts.try_into().map_err(|parts: Vec<&str>| {
        ApiError::parse(format!(
            "{} takes {} argument(s), got {}",
            word,
            N,
            parts.len()
        ))
    })
}

fn number<T: std::str::FromStr>(text: &str) -> Result<T, ApiError> {
    text.parse()
        .map_err(|_| ApiError::parse(format!("Expected a number, got '{}'", text)))
}

// =============================================================================
// Response
// =============================================================================

/// Successful result of a command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Tab(TabChange),
    Home(HomeView),
    Vendor(VendorDashboardView),
    Supplier(SupplierDashboardView),
    Filter(FilterResult),
    CartAdded(CartAdded),
    Favorite(FavoriteToggled),
    Form(FormView),
    ProductAdded(Product),
    OrderUpdated(OrderUpdate),
    Help { commands: Vec<&'static str> },
    Quit,
}

/// Runs a command against the app state.
pub fn dispatch(app: &mut AppState, command: Command) -> Result<Response, ApiError> {
    let response = match command {
        Command::SwitchTab(tab) => Response::Tab(navigation::switch_tab(app, tab)),
        Command::GetStarted(role) => Response::Tab(navigation::get_started(app, role)),
        Command::Show => show(app)?,
        Command::Search(term) => Response::Filter(vendor::set_search(app, &term)?),
        Command::Category(category) => Response::Filter(vendor::set_category(app, category)?),
        Command::AddToCart { supplier_id, index } => {
            Response::CartAdded(vendor::add_to_cart(app, supplier_id, index)?)
        }
        Command::ToggleFavorite(id) => Response::Favorite(vendor::toggle_favorite(app, id)?),
        Command::Dialog { open } => Response::Form(supplier::set_dialog(app, open)?),
        Command::SetField { field, value } => {
            Response::Form(supplier::set_field(app, field, &value)?)
        }
        Command::Submit => Response::ProductAdded(supplier::add_product(app)?),
        Command::AdvanceOrder { order_id, status } => {
            Response::OrderUpdated(supplier::advance_order(app, &order_id, status)?)
        }
        Command::Help => Response::Help {
            commands: HELP.to_vec(),
        },
        Command::Quit => Response::Quit,
    };
    Ok(response)
}

/// Snapshot of whichever view is on screen.
fn show(app: &AppState) -> Result<Response, ApiError> {
    Ok(match app.active_tab() {
        Tab::Home => Response::Home(navigation::show_home(app)),
        Tab::Vendor => Response::Vendor(vendor::show_vendor(app)?),
        Tab::Supplier => Response::Supplier(supplier::show_supplier(app)?),
    })
}
