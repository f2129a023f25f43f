//! # Seed Data
//!
//! The mock marketplace every view starts from. Each call returns a fresh
//! copy, so a remounted view always sees the original data.
//!
//! ```text
//!   products()        → supplier catalog   (3 products)
//!   orders()          → supplier orders    (ORD001, ORD002)
//!   dashboard_stats() → supplier headline numbers
//!   suppliers()       → vendor directory   (3 suppliers × 3 offers)
//!   home()            → landing page copy
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{
    DashboardStats, Offer, Order, OrderId, OrderLine, OrderStatus, Product, ProductId,
    ProductStatus, Supplier, SupplierId, Unit,
};

// =============================================================================
// Supplier Dashboard
// =============================================================================

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Fresh Tomatoes", "Vegetables", 25, 150, 45, ProductStatus::Active),
        product(2, "Red Onions", "Vegetables", 18, 200, 62, ProductStatus::Active),
        product(3, "Turmeric Powder", "Spices", 180, 25, 28, ProductStatus::LowStock),
    ]
}

fn product(
    id: u32,
    name: &str,
    category: &str,
    price: i64,
    stock: i64,
    orders: u32,
    status: ProductStatus,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_rupees(price),
        unit: Unit::Kg,
        stock,
        orders,
        status,
        description: None,
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId("ORD001".to_string()),
            vendor: "Rajesh's Chaat Corner".to_string(),
            items: vec![line("Fresh Tomatoes", 10, 25), line("Red Onions", 5, 18)],
            total: Money::from_rupees(340),
            status: OrderStatus::Pending,
            order_date: "2024-01-15".to_string(),
            delivery_date: "2024-01-16".to_string(),
        },
        Order {
            id: OrderId("ORD002".to_string()),
            vendor: "Mumbai Street Foods".to_string(),
            items: vec![line("Turmeric Powder", 2, 180)],
            total: Money::from_rupees(360),
            status: OrderStatus::Confirmed,
            order_date: "2024-01-15".to_string(),
            delivery_date: "2024-01-17".to_string(),
        },
    ]
}

fn line(name: &str, quantity: i64, price: i64) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        quantity,
        price: Money::from_rupees(price),
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_orders: 156,
        monthly_revenue: Money::from_rupees(45_600),
        active_products: 12,
        customer_rating: 4.8,
        review_count: 156,
    }
}

// =============================================================================
// Vendor Dashboard
// =============================================================================

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: SupplierId(1),
            name: "Fresh Veggie Hub".to_string(),
            location: "Karol Bagh, Delhi".to_string(),
            rating: 4.8,
            reviews: 156,
            verified: true,
            products: vec![
                offer("Fresh Tomatoes", 25, Unit::Kg, 30),
                offer("Onions", 18, Unit::Kg, 22),
                offer("Green Chilies", 40, Unit::Kg, 45),
            ],
            delivery: "Same day".to_string(),
            min_order: 10,
        },
        Supplier {
            id: SupplierId(2),
            name: "Spice Master".to_string(),
            location: "Chandni Chowk, Delhi".to_string(),
            rating: 4.9,
            reviews: 203,
            verified: true,
            products: vec![
                offer("Turmeric Powder", 180, Unit::Kg, 220),
                offer("Red Chili Powder", 200, Unit::Kg, 240),
                offer("Garam Masala", 320, Unit::Kg, 380),
            ],
            delivery: "Next day".to_string(),
            min_order: 5,
        },
        Supplier {
            id: SupplierId(3),
            name: "Oil & Grains Co.".to_string(),
            location: "Lajpat Nagar, Delhi".to_string(),
            rating: 4.7,
            reviews: 89,
            verified: true,
            products: vec![
                offer("Cooking Oil", 120, Unit::Liter, 140),
                offer("Wheat Flour", 28, Unit::Kg, 35),
                offer("Rice", 45, Unit::Kg, 52),
            ],
            delivery: "Same day".to_string(),
            min_order: 20,
        },
    ]
}

fn offer(name: &str, price: i64, unit: Unit, original_price: i64) -> Offer {
    Offer {
        name: name.to_string(),
        price: Money::from_rupees(price),
        unit,
        original_price: Money::from_rupees(original_price),
    }
}

// =============================================================================
// Home Page
// =============================================================================

/// A titled blurb on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Blurb {
    pub title: String,
    pub description: String,
}

/// Landing page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HomeContent {
    pub badge: String,
    pub headline: String,
    pub intro: String,
    /// "500+ Vendors", "Verified Suppliers", ...
    pub highlights: Vec<String>,
    pub features: Vec<Blurb>,
    pub steps: Vec<Blurb>,
}

pub fn home() -> HomeContent {
    let blurb = |title: &str, description: &str| Blurb {
        title: title.to_string(),
        description: description.to_string(),
    };

    HomeContent {
        badge: "Revolutionizing Street Food Supply Chain".to_string(),
        headline: "Connect with Trusted Raw Material Suppliers".to_string(),
        intro: "RawConnect bridges the gap between street food vendors and reliable suppliers. \
                Get quality ingredients at competitive prices with verified suppliers you can trust."
            .to_string(),
        highlights: vec![
            "500+ Vendors".to_string(),
            "Verified Suppliers".to_string(),
            "30% Cost Savings".to_string(),
        ],
        features: vec![
            blurb(
                "Verified Suppliers",
                "All suppliers are background-checked with quality certifications and business licenses",
            ),
            blurb(
                "Best Prices",
                "Compare prices across multiple suppliers and access bulk pricing benefits",
            ),
            blurb(
                "Quality Assurance",
                "Real vendor reviews and ratings ensure you get consistent quality every time",
            ),
        ],
        steps: vec![
            blurb(
                "Browse & Compare",
                "Search for raw materials and compare prices from verified suppliers in your area",
            ),
            blurb(
                "Order & Track",
                "Place orders directly through the platform and track delivery in real-time",
            ),
            blurb(
                "Rate & Review",
                "Share your experience to help build a trustworthy supplier community",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u32> = products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ids: Vec<u32> = suppliers().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_order_totals_are_consistent() {
        for order in orders() {
            assert!(order.is_total_consistent(), "{} total drifted", order.id);
        }
    }

    #[test]
    fn test_every_offer_is_discounted() {
        for supplier in suppliers() {
            for offer in &supplier.products {
                assert!(offer.discount_percent() > 0, "{} has no discount", offer.name);
            }
        }
    }
}
