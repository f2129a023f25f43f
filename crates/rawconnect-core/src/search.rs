//! # Supplier Search
//!
//! The vendor dashboard's search box and category select.
//!
//! ## Matching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  term = "chandni"                                                      │
//! │                                                                         │
//! │  Fresh Veggie Hub  │ Karol Bagh, Delhi      │  ✗                       │
//! │  Spice Master      │ Chandni Chowk, Delhi   │  ✓ (location)            │
//! │  Oil & Grains Co.  │ Lajpat Nagar, Delhi    │  ✗                       │
//! │                                                                         │
//! │  • case-insensitive substring on name OR location                      │
//! │  • empty term matches everything                                       │
//! │  • input order is kept, nothing is re-sorted                           │
//! │  • the category select is NOT part of the predicate                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Supplier;

// =============================================================================
// Category Filter
// =============================================================================

/// Value of the category select on the vendor dashboard.
///
/// Stored with the browse state but not applied by [`filter_suppliers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryFilter {
    #[default]
    All,
    Vegetables,
    Spices,
    /// "Grains & Oil"
    Grains,
    Dairy,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Vegetables,
        CategoryFilter::Spices,
        CategoryFilter::Grains,
        CategoryFilter::Dairy,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Vegetables => "vegetables",
            CategoryFilter::Spices => "spices",
            CategoryFilter::Grains => "grains",
            CategoryFilter::Dairy => "dairy",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Vegetables => "Vegetables",
            CategoryFilter::Spices => "Spices",
            CategoryFilter::Grains => "Grains & Oil",
            CategoryFilter::Dairy => "Dairy",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: CategoryFilter::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Whether a supplier's name or location contains `term`, ignoring case.
pub fn matches_term(supplier: &Supplier, term: &str) -> bool {
    let needle = term.to_lowercase();
    supplier.name.to_lowercase().contains(&needle)
        || supplier.location.to_lowercase().contains(&needle)
}

/// Suppliers whose name or location contains `term`, in input order.
///
/// The input slice is never modified. The term is used as typed, so
/// surrounding spaces are part of the match.
///
/// ## Example
/// ```rust
/// use rawconnect_core::fixtures;
/// use rawconnect_core::search::filter_suppliers;
///
/// let suppliers = fixtures::suppliers();
/// assert_eq!(filter_suppliers(&suppliers, "").len(), 3);
/// assert_eq!(filter_suppliers(&suppliers, "DELHI").len(), 3);
/// assert!(filter_suppliers(&suppliers, "mumbai").is_empty());
/// ```
pub fn filter_suppliers<'a>(suppliers: &'a [Supplier], term: &str) -> Vec<&'a Supplier> {
    suppliers.iter().filter(|s| matches_term(s, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn names<'a>(hits: &[&'a Supplier]) -> Vec<&'a str> {
        hits.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_location_match() {
        let suppliers = fixtures::suppliers();
        let hits = filter_suppliers(&suppliers, "chandni");
        assert_eq!(names(&hits), vec!["Spice Master"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let suppliers = fixtures::suppliers();
        assert_eq!(names(&filter_suppliers(&suppliers, "VEGGIE")), vec!["Fresh Veggie Hub"]);
        assert_eq!(names(&filter_suppliers(&suppliers, "oil &")), vec!["Oil & Grains Co."]);
    }

    #[test]
    fn test_order_is_preserved() {
        let suppliers = fixtures::suppliers();
        // "a" hits all three
        assert_eq!(
            names(&filter_suppliers(&suppliers, "a")),
            vec!["Fresh Veggie Hub", "Spice Master", "Oil & Grains Co."]
        );
    }

    #[test]
    fn test_product_names_are_not_searched() {
        let suppliers = fixtures::suppliers();
        assert!(filter_suppliers(&suppliers, "turmeric").is_empty());
    }

    #[test]
    fn test_whitespace_is_literal() {
        let suppliers = fixtures::suppliers();
        assert!(filter_suppliers(&suppliers, " spice ").is_empty());
        assert_eq!(filter_suppliers(&suppliers, "spice ").len(), 1);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("grains".parse::<CategoryFilter>().unwrap(), CategoryFilter::Grains);
        assert_eq!(CategoryFilter::Grains.label(), "Grains & Oil");
        assert!("meat".parse::<CategoryFilter>().is_err());
    }
}
