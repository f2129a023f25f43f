//! # Catalog
//!
//! The supplier's product list and the add-product form that feeds it.
//!
//! ## Add-Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Supplier fills the "Add New Product" dialog                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ProductForm { name, category, price, unit, stock, description }       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Catalog::add(&form) ← THIS MODULE                                     │
//! │       │                                                                 │
//! │       ├── name/price/stock blank? → Err(Required), catalog unchanged   │
//! │       ├── price/stock not a number? → Err(InvalidNumber)               │
//! │       │                                                                 │
//! │       └── OK → Product { id: next, status: active, orders: 0 }         │
//! │                appended at the end                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//! Ids come from a counter that starts one past the highest seeded id.
//! The catalog never removes products, so the counter always equals
//! `len() + 1` for a catalog seeded with ids `1..=n`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Product, ProductId, ProductStatus, Unit};
use crate::validation::{self, ValidationResult};

// =============================================================================
// Product Form
// =============================================================================

/// Draft values of the add-product dialog, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    /// Raw text of the price input.
    pub price: String,
    pub unit: Unit,
    /// Raw text of the stock input.
    pub stock: String,
    pub description: String,
}

/// A single input of the add-product dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
    Unit,
    Stock,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Unit,
        FormField::Stock,
        FormField::Description,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Price => "price",
            FormField::Unit => "unit",
            FormField::Stock => "stock",
            FormField::Description => "description",
        }
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "field".to_string(),
                allowed: FormField::ALL.iter().map(|f| f.as_str().to_string()).collect(),
            })
    }
}

impl ProductForm {
    /// Sets one input. Only `unit` can be rejected, since it is a select.
    pub fn set(&mut self, field: FormField, value: &str) -> ValidationResult<()> {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Category => self.category = value.to_string(),
            FormField::Price => self.price = value.to_string(),
            FormField::Unit => self.unit = value.parse()?,
            FormField::Stock => self.stock = value.to_string(),
            FormField::Description => self.description = value.to_string(),
        }
        Ok(())
    }

    /// Back to a blank form with `kg` selected.
    pub fn reset(&mut self) {
        *self = ProductForm::default();
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The supplier's product list. Append-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: u32,
}

impl Catalog {
    /// Creates a catalog from existing products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        Catalog { products, next_id }
    }

    /// Validates the form and appends a new product.
    ///
    /// ## Rules
    /// - `name`, `price` and `stock` are required
    /// - `price` and `stock` must be non-negative whole numbers
    /// - New products are always `active` with zero orders, whatever the stock
    ///
    /// On error the catalog is left untouched.
    pub fn add(&mut self, form: &ProductForm) -> ValidationResult<&Product> {
        validation::require_fields(&[
            ("name", &form.name),
            ("price", &form.price),
            ("stock", &form.stock),
        ])?;

        let price = validation::parse_price(&form.price)?;
        let stock = validation::parse_stock(&form.stock)?;

        let product = Product {
            id: ProductId(self.next_id),
            name: form.name.trim().to_string(),
            category: form.category.trim().to_string(),
            price,
            unit: form.unit,
            stock,
            orders: 0,
            status: ProductStatus::Active,
            description: validation::optional_text(&form.description),
        };

        debug!(id = %product.id, name = %product.name, "catalog: product appended");

        let index = self.products.len();
        self.next_id += 1;
        self.products.push(product);

        Ok(&self.products[index])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn tomatoes() -> Product {
        Product {
            id: ProductId(1),
            name: "Fresh Tomatoes".to_string(),
            category: "Vegetables".to_string(),
            price: Money::from_rupees(25),
            unit: Unit::Kg,
            stock: 150,
            orders: 45,
            status: ProductStatus::Active,
            description: None,
        }
    }

    fn onion_form() -> ProductForm {
        ProductForm {
            name: "Red Onions".to_string(),
            category: "vegetables".to_string(),
            price: "18".to_string(),
            unit: Unit::Kg,
            stock: "200".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_product_scenario() {
        let mut catalog = Catalog::new(vec![tomatoes()]);

        let added = catalog.add(&onion_form()).unwrap().clone();

        assert_eq!(catalog.len(), 2);
        assert_eq!(added.id, ProductId(2));
        assert_eq!(added.name, "Red Onions");
        assert_eq!(added.price, Money::from_rupees(18));
        assert_eq!(added.stock, 200);
        assert_eq!(added.status, ProductStatus::Active);
        assert_eq!(added.orders, 0);
        assert_eq!(catalog.products()[1], added);
    }

    #[test]
    fn test_add_product_status_ignores_low_stock() {
        let mut catalog = Catalog::new(vec![]);
        let mut form = onion_form();
        form.stock = "0".to_string();

        let added = catalog.add(&form).unwrap();
        assert_eq!(added.status, ProductStatus::Active);
        assert_eq!(added.id, ProductId(1));
    }

    #[test]
    fn test_add_product_missing_fields_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new(vec![tomatoes()]);

        for field in [FormField::Name, FormField::Price, FormField::Stock] {
            let mut form = onion_form();
            form.set(field, "").unwrap();

            let err = catalog.add(&form).unwrap_err();
            assert!(matches!(err, ValidationError::Required { .. }));
            assert_eq!(catalog.len(), 1);
        }
    }

    #[test]
    fn test_add_product_rejects_unparseable_numbers() {
        let mut catalog = Catalog::new(vec![tomatoes()]);
        let mut form = onion_form();
        form.price = "eighteen".to_string();

        assert!(matches!(
            catalog.add(&form).unwrap_err(),
            ValidationError::InvalidNumber { .. }
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut catalog = Catalog::new(vec![tomatoes()]);
        let first = catalog.add(&onion_form()).unwrap().id;
        let second = catalog.add(&onion_form()).unwrap().id;

        assert_eq!(first, ProductId(2));
        assert_eq!(second, ProductId(3));
        assert_eq!(catalog.get(ProductId(3)).map(|p| p.name.as_str()), Some("Red Onions"));
    }

    #[test]
    fn test_optional_fields() {
        let mut catalog = Catalog::new(vec![]);
        let mut form = onion_form();
        form.category = String::new();
        form.description = "  Nashik, sorted  ".to_string();

        let added = catalog.add(&form).unwrap();
        assert_eq!(added.category, "");
        assert_eq!(added.description.as_deref(), Some("Nashik, sorted"));
    }

    #[test]
    fn test_form_set_and_reset() {
        let mut form = ProductForm::default();
        form.set("unit".parse().unwrap(), "packet").unwrap();
        form.set(FormField::Name, "Papad").unwrap();
        assert_eq!(form.unit, Unit::Packet);
        assert!(form.set(FormField::Unit, "crate").is_err());
        assert!("colour".parse::<FormField>().is_err());

        form.reset();
        assert_eq!(form, ProductForm::default());
        assert_eq!(form.unit, Unit::Kg);
    }
}
