//! # Order Book
//!
//! Orders vendors have placed with the supplier, and their status changes.
//!
//! ## Status Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update_status("ORD001", confirmed)                                    │
//! │       │                                                                 │
//! │       ├── id unknown? → None, nothing changes, nothing reported        │
//! │       │                                                                 │
//! │       └── found → status replaced, every other field untouched         │
//! │                                                                         │
//! │  No legality check: pending → delivered, or delivered → pending,       │
//! │  are applied as asked. The dashboard only ever offers the forward      │
//! │  step from OrderStatus::next().                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Order, OrderStatus};

/// The supplier's orders, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        OrderBook { orders }
    }

    /// Sets the status of the order with this id.
    ///
    /// Returns the updated order, or `None` when no order matches.
    pub fn update_status(&mut self, order_id: &str, status: OrderStatus) -> Option<&Order> {
        let order = self.orders.iter_mut().find(|o| o.id.as_str() == order_id)?;

        debug!(
            order_id = %order.id,
            from = %order.status,
            to = %status,
            "orders: status replaced"
        );
        order.status = status;

        Some(order)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id.as_str() == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_confirm_pending_order() {
        let mut book = OrderBook::new(fixtures::orders());
        let before = book.get("ORD001").cloned().unwrap();
        assert_eq!(before.status, OrderStatus::Pending);

        let after = book
            .update_status("ORD001", OrderStatus::Confirmed)
            .cloned()
            .unwrap();

        assert_eq!(after.status, OrderStatus::Confirmed);
        assert_eq!(after.id, before.id);
        assert_eq!(after.vendor, before.vendor);
        assert_eq!(after.items, before.items);
        assert_eq!(after.total, before.total);
        assert_eq!(after.order_date, before.order_date);
        assert_eq!(after.delivery_date, before.delivery_date);
    }

    #[test]
    fn test_unknown_order_is_noop() {
        let mut book = OrderBook::new(fixtures::orders());
        let snapshot = book.orders().to_vec();

        assert!(book.update_status("ORD999", OrderStatus::Delivered).is_none());
        assert_eq!(book.orders(), snapshot.as_slice());
    }

    #[test]
    fn test_other_orders_untouched() {
        let mut book = OrderBook::new(fixtures::orders());
        let other = book.get("ORD002").cloned().unwrap();

        book.update_status("ORD001", OrderStatus::Confirmed);
        assert_eq!(book.get("ORD002"), Some(&other));
    }

    #[test]
    fn test_no_transition_guard() {
        let mut book = OrderBook::new(fixtures::orders());

        // Skip straight to delivered, then back again
        book.update_status("ORD001", OrderStatus::Delivered);
        assert_eq!(book.get("ORD001").map(|o| o.status), Some(OrderStatus::Delivered));

        book.update_status("ORD001", OrderStatus::Pending);
        assert_eq!(book.get("ORD001").map(|o| o.status), Some(OrderStatus::Pending));
    }
}
