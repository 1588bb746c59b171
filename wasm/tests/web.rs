//! Browser tests for the JavaScript-facing API
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use agrimarket_wasm::{AgriMarket, Farmer, Order};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn register_then_search() {
    let mut market = AgriMarket::new();
    market
        .register_farmer_json(
            r#"{"name":"Meadow Bees","location":"Riverside","phone":"123","description":"Honey","produce":"Honey","deliveryRadius":4}"#,
        )
        .unwrap();

    let json = market
        .list_farmers_json(Some("honey".to_string()), None, None)
        .unwrap();
    let farmers: Vec<Farmer> = serde_json::from_str(&json).unwrap();
    assert_eq!(farmers.len(), 1);
    assert_eq!(farmers[0].id, 3);
}

#[wasm_bindgen_test]
fn incomplete_registration_is_an_error() {
    let mut market = AgriMarket::new();
    let result = market.register_farmer_json(r#"{"name":"Meadow Bees"}"#);
    assert!(result.is_err());
    assert_eq!(market.directory().farmer_count(), 2);
}

#[wasm_bindgen_test]
fn review_order_and_cancel() {
    let mut market = AgriMarket::new();
    let farmer: Farmer =
        serde_json::from_str(&market.add_review_json(1, "Meera", "Good", 3).unwrap()).unwrap();
    assert_eq!(farmer.rating, rust_decimal::Decimal::from(4));

    assert!(market.place_order_json(1, "Meera", "", "Greens").is_err());
    assert_eq!(market.orders_json().unwrap(), "[]");

    let order: Order = serde_json::from_str(
        &market
            .place_order_json(1, "Meera", "meera@example.com", "Greens")
            .unwrap(),
    )
    .unwrap();
    assert_eq!(order.farmer, "Green Valley Farms");
    assert_eq!(order.email, None);

    market.cancel_order_json(0).unwrap();
    assert!(market.cancel_order_json(0).is_err());
    assert_eq!(market.orders_json().unwrap(), "[]");
}
