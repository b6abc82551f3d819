//! Formatting and validation helpers through the public crate surface.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use storekit_core::{
    format_date, format_price, format_price_in, is_valid_email, is_valid_phone, is_valid_url,
    slugify, validate_required,
};

#[test]
fn test_slugify_product_name() {
    assert_eq!(slugify("Men's  T-Shirt!!"), "mens-t-shirt");
    assert_eq!(slugify("  Summer Sale 2024  "), "summer-sale-2024");
}

#[test]
fn test_email_validation() {
    assert!(!is_valid_email("a@b"));
    assert!(is_valid_email("a@b.com"));
    assert!(!is_valid_email("a b@c.com"));
}

#[test]
fn test_phone_and_url_validation() {
    assert!(is_valid_phone("+1 555 0100"));
    assert!(!is_valid_phone("555-CALL-NOW"));
    assert!(is_valid_url("https://shop.example.com/products/42"));
    assert!(!is_valid_url("shop.example.com"));
}

#[test]
fn test_required_values() {
    assert!(validate_required("Widget"));
    assert!(!validate_required("   "));
    assert!(!validate_required(&Vec::<String>::new()));
    assert!(!validate_required(&None::<String>));
    assert!(validate_required(&Some(Decimal::ZERO)));
}

#[test]
fn test_price_and_date_for_display() {
    assert_eq!(format_price(Decimal::new(123_456, 2)), "$1,234.56");
    assert_eq!(format_price_in(Decimal::new(1500, 0), "JPY"), "¥1,500");
    assert_eq!(format_date("2024-03-05").unwrap(), "Mar 05, 2024");
}
