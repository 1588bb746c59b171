//! Directory property-based tests
//!
//! Covers:
//! - Rating is always the rounded mean of every review's stars
//! - Failed registrations leave the directory untouched
//! - Listing keeps exactly the matching farmers, in order
//! - Orders against unknown farmers are rejected without side effects
//! - Cancelled orders cannot be cancelled again

use agrimarket_backend::{create_app, AppState, Config};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    Directory, Farmer, FarmerQuery, NewOrder, NewReview, NumericInput, RegisterFarmer,
};
use tower::ServiceExt;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn stars_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1..=5u8, 1..40)
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Vegetables", "Fruits", "Herbs", "Honey", "Dairy", "Eggs", "Grains", "Mangoes",
    ])
    .prop_map(str::to_string)
}

fn location_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Downtown", "Suburbs", "Suburban", "Riverside", "Old Town"])
        .prop_map(str::to_string)
}

/// A registration form, with a mask saying which fields to blank out
fn registration_strategy() -> impl Strategy<Value = (RegisterFarmer, [bool; 6])> {
    (
        "[A-Z][a-z]{2,10} Farms",
        location_strategy(),
        prop::collection::vec(label_strategy(), 1..4),
        0..50u32,
        prop::array::uniform6(any::<bool>()),
    )
        .prop_map(|(name, location, produce, radius, blanks)| {
            let form = RegisterFarmer {
                name: Some(name),
                location: Some(location),
                phone: Some("+91 9000000000".to_string()),
                description: Some("Local produce".to_string()),
                produce: Some(produce.join(", ")),
                delivery_radius: Some(NumericInput::from(radius)),
            };
            (form, blanks)
        })
}

fn blank_fields(mut form: RegisterFarmer, blanks: [bool; 6]) -> RegisterFarmer {
    if blanks[0] {
        form.name = Some("  ".to_string());
    }
    if blanks[1] {
        form.location = None;
    }
    if blanks[2] {
        form.phone = Some(String::new());
    }
    if blanks[3] {
        form.description = None;
    }
    if blanks[4] {
        form.produce = Some(" ,, ".to_string());
    }
    if blanks[5] {
        form.delivery_radius = None;
    }
    form
}

/// Expected rating computed with integer arithmetic: round(10 * sum / n)
/// with halves rounded up, expressed in tenths
fn expected_rating(stars: &[u8]) -> Decimal {
    let sum: i64 = stars.iter().map(|s| i64::from(*s)).sum();
    let n = stars.len() as i64;
    let tenths = (20 * sum + n) / (2 * n);
    Decimal::new(tenths, 1)
}

fn review(farmer_id: u32, stars: u8) -> NewReview {
    NewReview {
        farmer_id: Some(NumericInput::from(farmer_id)),
        user: Some("Buyer".to_string()),
        comment: Some("Fresh".to_string()),
        stars: Some(NumericInput::Integer(i64::from(stars))),
    }
}

fn reference_matches(farmer: &Farmer, query: &FarmerQuery) -> bool {
    let search_ok = query.search.as_deref().map_or(true, |term| {
        let term = term.to_lowercase();
        farmer.name.to_lowercase().contains(&term)
            || farmer.location.to_lowercase().contains(&term)
            || farmer.produce.iter().any(|p| p.to_lowercase().contains(&term))
    });
    let location_ok = query
        .location
        .as_deref()
        .map_or(true, |l| farmer.location.eq_ignore_ascii_case(l));
    let produce_ok = query
        .produce
        .as_deref()
        .map_or(true, |p| farmer.produce.iter().any(|x| x.eq_ignore_ascii_case(p)));
    search_ok && location_ok && produce_ok
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Rating equals the rounded mean of all stars after every review
    #[test]
    fn test_rating_is_rounded_mean(added in stars_strategy()) {
        let mut directory = Directory::seeded();
        let mut all_stars: Vec<u8> = directory
            .farmer(1)
            .unwrap()
            .reviews
            .iter()
            .map(|r| r.stars)
            .collect();

        for stars in added {
            all_stars.push(stars);
            let farmer = directory.add_review(review(1, stars)).unwrap();
            prop_assert_eq!(farmer.rating, expected_rating(&all_stars));
            prop_assert_eq!(farmer.reviews.len(), all_stars.len());
        }
    }

    /// Registration succeeds only when every field is present; a failure
    /// leaves the farmer list exactly as it was
    #[test]
    fn test_registration_all_or_nothing((form, blanks) in registration_strategy()) {
        let mut directory = Directory::seeded();
        let before = directory.farmers().to_vec();
        let any_blank = blanks.iter().any(|b| *b);

        let result = directory.register_farmer(blank_fields(form, blanks));

        if any_blank {
            prop_assert!(result.unwrap_err().is_validation());
            prop_assert_eq!(directory.farmers(), before.as_slice());
        } else {
            let farmer = result.unwrap();
            prop_assert_eq!(farmer.id, 3);
            prop_assert_eq!(directory.farmer_count(), 3);
            prop_assert_eq!(farmer.rating, Decimal::from(5));
        }
    }

    /// Listing returns exactly the matching farmers in directory order
    #[test]
    fn test_listing_matches_reference_filter(
        forms in prop::collection::vec(registration_strategy(), 0..8),
        search in prop::option::of(prop::sample::select(vec!["farm", "sub", "ERS", "honey", "mango", "town"])),
        location in prop::option::of(location_strategy()),
        produce in prop::option::of(label_strategy()),
    ) {
        let mut directory = Directory::seeded();
        for (form, _) in forms {
            directory.register_farmer(form).unwrap();
        }

        let query = FarmerQuery {
            search: search.map(str::to_string),
            location: location.map(|l| l.to_uppercase()),
            produce: produce.map(|p| p.to_lowercase()),
        };

        let listed = directory.list_farmers(&query);
        let expected: Vec<Farmer> = directory
            .farmers()
            .iter()
            .filter(|f| reference_matches(f, &query))
            .cloned()
            .collect();

        prop_assert_eq!(listed, expected);
    }

    /// Orders against unknown farmers are rejected over HTTP and the order
    /// list stays empty
    #[test]
    fn test_unknown_farmer_orders_rejected(farmer_id in prop_oneof![3..10_000i64, -100..=0i64]) {
        let app = create_app(AppState::new(Config::default()));

        let body = serde_json::json!({
            "farmerId": farmer_id,
            "buyerName": "Rahul",
            "buyerEmail": "rahul@example.com",
            "orderDetails": "1 crate"
        });
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = tokio_test::block_on(app.clone().oneshot(request)).unwrap();
        prop_assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = Request::builder()
            .uri("/api/orders")
            .body(Body::empty())
            .unwrap();
        let response = tokio_test::block_on(app.oneshot(request)).unwrap();
        let bytes = tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX)).unwrap();
        prop_assert_eq!(&bytes[..], b"[]");
    }

    /// Every placed order can be cancelled exactly once
    #[test]
    fn test_cancel_succeeds_once(order_count in 1..20usize, pick in any::<prop::sample::Index>()) {
        let mut directory = Directory::seeded();
        for i in 0..order_count {
            let form = NewOrder {
                farmer_id: Some(NumericInput::from((i % 2 + 1) as u32)),
                buyer_name: Some(format!("Buyer {}", i)),
                buyer_email: Some("buyer@example.com".to_string()),
                order_details: Some("Weekly box".to_string()),
            };
            directory.place_order(form.validate().unwrap()).unwrap();
        }

        let target = directory.orders()[pick.index(order_count)].id;
        prop_assert!(directory.cancel_order(target).is_ok());
        prop_assert_eq!(directory.order_count(), order_count - 1);
        prop_assert!(directory.cancel_order(target).unwrap_err().is_not_found());
        prop_assert_eq!(directory.order_count(), order_count - 1);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_expected_rating_helper() {
    assert_eq!(expected_rating(&[5, 4]), Decimal::new(45, 1));
    assert_eq!(expected_rating(&[5, 4, 3]), Decimal::new(40, 1));
    assert_eq!(expected_rating(&[5, 4, 4, 4]), Decimal::new(43, 1));
}

#[test]
fn test_green_valley_rating_example() {
    let mut directory = Directory::seeded();
    assert_eq!(directory.farmer(1).unwrap().rating, Decimal::new(45, 1));

    let farmer = directory.add_review(review(1, 3)).unwrap();
    assert_eq!(farmer.rating, Decimal::new(40, 1));
}
