//! Integration tests for cart flows as the CLI drives them.

use szachmart_cart::CartStore;
use szachmart_core::types::Money;
use szachmart_entity::product::Product;

fn product(id: i64, name: &str, price_minor: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: String::new(),
        price: Money::from_minor(price_minor),
        category_name: "Boards".to_string(),
        author_name: String::new(),
        image_url: String::new(),
    }
}

#[test]
fn test_shopping_flow_totals() {
    let mut cart = CartStore::default();
    cart.add_item(&product(1, "Tournament board", 850), 2);
    cart.add_item(&product(2, "Staunton pieces", 850), 1);

    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), Money::from_minor(2550));
    assert_eq!(cart.total().to_string(), "25.50");
}

#[test]
fn test_adding_same_product_merges_lines() {
    let mut cart = CartStore::default();
    let board = product(1, "Tournament board", 850);
    cart.add_item(&board, 1);
    cart.add_item(&board, 2);

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 3);
}

#[test]
fn test_update_to_zero_removes_the_line() {
    let mut cart = CartStore::default();
    cart.add_item(&product(1, "Tournament board", 850), 2);
    cart.add_item(&product(2, "Staunton pieces", 1200), 1);

    cart.update_quantity(1, 0);
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].product_id, 2);

    // Updating a product that is not in the cart changes nothing
    cart.update_quantity(99, 5);
    assert_eq!(cart.lines().len(), 1);
}

#[test]
fn test_checkout_payload_and_clear() {
    let mut cart = CartStore::default();
    cart.add_item(&product(7, "Chess clock", 4999), 2);

    let items = cart.order_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, 7);
    assert_eq!(items[0].quantity, 2);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Money::ZERO);
}

#[test]
fn test_cart_survives_a_json_round_trip() {
    let mut cart = CartStore::default();
    cart.add_item(&product(1, "Tournament board", 850), 2);
    cart.add_item(&product(2, "Staunton pieces", 1200), 1);

    let json = serde_json::to_string(&cart).unwrap();
    let restored: CartStore = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.item_count(), 3);
    assert_eq!(restored.total(), Money::from_minor(2900));
}
