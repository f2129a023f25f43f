//! Property-based tests for the marketplace invariants.
//!
//! These use proptest to check the catalog, search, cart and favorites
//! rules over generated inputs rather than a few hand-picked ones.

use proptest::prelude::*;

use rawconnect_core::catalog::{Catalog, ProductForm};
use rawconnect_core::search::{filter_suppliers, matches_term};
use rawconnect_core::types::{ProductStatus, Supplier, SupplierId, Unit};
use rawconnect_core::{fixtures, Cart, Favorites};

// Strategies for generating test data
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

fn unit_strategy() -> impl Strategy<Value = Unit> {
    prop_oneof![
        Just(Unit::Kg),
        Just(Unit::Liter),
        Just(Unit::Piece),
        Just(Unit::Packet),
    ]
}

fn valid_form_strategy() -> impl Strategy<Value = ProductForm> {
    (
        name_strategy(),
        "[a-z]{0,10}",
        0i64..100_000,
        unit_strategy(),
        0i64..100_000,
    )
        .prop_map(|(name, category, price, unit, stock)| ProductForm {
            name,
            category,
            price: price.to_string(),
            unit,
            stock: stock.to_string(),
            description: String::new(),
        })
}

fn search_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z ,&.]{1,6}",
        prop::sample::select(vec![
            "chandni".to_string(),
            "DELHI".to_string(),
            "Hub".to_string(),
            "oil".to_string(),
        ]),
    ]
}

// Property: adding a valid product grows the catalog by exactly one
proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn valid_add_appends_one_active_product(form in valid_form_strategy()) {
        let mut catalog = Catalog::new(fixtures::products());
        let before = catalog.len();

        let added = catalog.add(&form).map(|p| p.clone());
        prop_assert!(added.is_ok(), "valid form rejected: {:?}", form);
        let added = added.unwrap();

        prop_assert_eq!(catalog.len(), before + 1);
        prop_assert_eq!(added.status, ProductStatus::Active);
        prop_assert_eq!(added.orders, 0);
        prop_assert_eq!(added.id.0 as usize, before + 1);
    }

    #[test]
    fn add_with_blank_required_field_changes_nothing(
        form in valid_form_strategy(),
        blank in 0usize..3,
        spaces in " {0,3}",
    ) {
        let mut form = form;
        match blank {
            0 => form.name = spaces,
            1 => form.price = spaces,
            _ => form.stock = spaces,
        }

        let mut catalog = Catalog::new(fixtures::products());
        let before = catalog.products().to_vec();

        prop_assert!(catalog.add(&form).is_err());
        prop_assert_eq!(catalog.products(), before.as_slice());
    }
}

// Property: search returns an order-preserving, exact partition
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn filter_is_ordered_subsequence_and_exact(term in search_term_strategy()) {
        let suppliers = fixtures::suppliers();
        let hits = filter_suppliers(&suppliers, &term);

        // subsequence in original order
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| suppliers.iter().position(|s| s.id == h.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let needle = term.to_lowercase();
        for s in &suppliers {
            let included = hits.iter().any(|h| h.id == s.id);
            let expected = s.name.to_lowercase().contains(&needle)
                || s.location.to_lowercase().contains(&needle);
            prop_assert_eq!(included, expected, "supplier {} term {:?}", s.name, term);
            prop_assert_eq!(matches_term(s, &term), expected);
        }
    }

    #[test]
    fn filter_is_deterministic_and_pure(term in search_term_strategy()) {
        let suppliers: Vec<Supplier> = fixtures::suppliers();
        let copy = suppliers.clone();

        let first: Vec<SupplierId> = filter_suppliers(&suppliers, &term).iter().map(|s| s.id).collect();
        let second: Vec<SupplierId> = filter_suppliers(&suppliers, &term).iter().map(|s| s.id).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(suppliers, copy);
    }
}

// Property: favorites double-toggle and cart append semantics
proptest! {
    #[test]
    fn double_toggle_restores_favorites(
        seed in prop::collection::vec(1u32..10, 0..8),
        target in 1u32..10,
    ) {
        let mut favorites = Favorites::new();
        for id in seed {
            favorites.toggle(SupplierId(id));
        }
        let before = favorites.clone();

        favorites.toggle(SupplierId(target));
        favorites.toggle(SupplierId(target));

        prop_assert_eq!(favorites, before);
    }

    #[test]
    fn repeated_add_to_cart_never_merges(
        supplier_idx in 0usize..3,
        offer_idx in 0usize..3,
        times in 1usize..6,
    ) {
        let suppliers = fixtures::suppliers();
        let supplier = &suppliers[supplier_idx];
        let offer = &supplier.products[offer_idx];

        let mut cart = Cart::new();
        for _ in 0..times {
            cart.add(supplier, offer);
        }

        prop_assert_eq!(cart.len(), times);
        prop_assert!(cart.entries().iter().all(|e| e.quantity == 1));
        prop_assert!(cart.entries().iter().all(|e| e.product == *offer));
    }
}
