//! The cart store and its line state machine.
//!
//! A line is unique per product: adding an already-present product merges
//! into its quantity. A line exists only with quantity ≥ 1; updating a line
//! to zero or less removes it. Totals are summed in integer minor units.

use serde::{Deserialize, Serialize};
use tracing::debug;

use szachmart_core::types::Money;
use szachmart_entity::order::OrderItemRequest;
use szachmart_entity::product::Product;

/// One product-quantity pairing held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identity; unique within the cart.
    pub product_id: i64,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Money,
    /// Quantity, always ≥ 1 while the line exists.
    pub quantity: u32,
}

/// The shopping cart: lines unique per product id, in insertion order.
///
/// Owned state, passed explicitly to whoever needs it; mutations run to
/// completion on the caller's thread. Lifetime is the browsing session —
/// durability across runs is the caller's concern (serde round-trips the
/// whole store for that).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    /// Current cart lines.
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart.
    ///
    /// An existing line for the same product has its quantity incremented;
    /// otherwise a new line is appended. A zero `qty` is treated as 1, so a
    /// line always leaves this call with quantity ≥ 1.
    pub fn add_item(&mut self, product: &Product, qty: u32) {
        let qty = qty.max(1);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(qty);
            debug!(product_id = product.id, quantity = line.quantity, "Cart line merged");
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity: qty,
            });
            debug!(product_id = product.id, quantity = qty, "Cart line added");
        }
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line, equivalent to
    /// [`remove_item`](Self::remove_item). An absent product id is a silent
    /// no-op.
    pub fn update_quantity(&mut self, product_id: i64, new_qty: i64) {
        if new_qty <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = new_qty.min(u32::MAX as i64) as u32;
            debug!(product_id, quantity = line.quantity, "Cart line updated");
        }
    }

    /// Removes a line. No-op when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: i64) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() != before {
            debug!(product_id, "Cart line removed");
        }
    }

    /// Empties the cart. Called after an order is successfully placed.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price × quantity` over all lines, in exact minor units.
    pub fn total(&self) -> Money {
        self.lines.iter().fold(Money::ZERO, |acc, line| {
            line.unit_price
                .checked_mul(line.quantity)
                .and_then(|line_total| acc.checked_add(line_total))
                .unwrap_or(acc)
        })
    }

    /// Sum of quantities over all lines (the cart badge number).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Maps the cart to the order-request lines the backend expects.
    pub fn order_items(&self) -> Vec<OrderItemRequest> {
        self.lines
            .iter()
            .map(|l| OrderItemRequest {
                product_id: l.product_id,
                quantity: l.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price_minor: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price: Money::from_minor(price_minor),
            category_name: "Figury".to_string(),
            author_name: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_add_merges_duplicate_product() {
        let mut cart = CartStore::new();
        let board = product(1, "Szachownica turniejowa", 12000);

        cart.add_item(&board, 1);
        cart.add_item(&board, 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_becomes_one() {
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "Zegar", 9900), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "Zegar", 9900), 2);

        cart.update_quantity(1, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_update_negative_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "Zegar", 9900), 2);
        cart.update_quantity(1, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_product_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "Zegar", 9900), 1);
        cart.update_quantity(42, 5);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = CartStore::new();
        cart.remove_item(42);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_and_count_scenario() {
        // [{A, 10.00, qty 2}, {B, 5.50, qty 1}] → total 25.50, count 3
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "A", 1000), 2);
        cart.add_item(&product(2, "B", 550), 1);

        assert_eq!(cart.total(), Money::from_minor(2550));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear_resets_aggregates() {
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "A", 1000), 2);
        cart.clear();

        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_items_mapping() {
        let mut cart = CartStore::new();
        cart.add_item(&product(7, "A", 1000), 2);
        cart.add_item(&product(9, "B", 550), 1);

        let items = cart.order_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, 7);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].product_id, 9);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = CartStore::new();
        cart.add_item(&product(1, "Książka debiutowa", 4599), 3);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: CartStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lines(), cart.lines());
        assert_eq!(restored.total(), Money::from_minor(13797));
    }
}
