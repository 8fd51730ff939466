//! Tests for the pure message generator
//!
//! These tests exercise the core logic directly, without the HTTP layer:
//! validation ordering, discount rounding, tier boundary selection, and
//! template interpolation.

use dealgen::message::{generate, DiscountTier, GenerateError};

#[test]
fn test_generate_success_contains_all_fields() {
    let deal = generate("https://x.co/p", "499.00", "999.00").unwrap();

    assert_eq!(deal.discount_percentage, 50);
    assert_eq!(deal.tier, DiscountTier::DontMiss);

    // The template must interpolate the link verbatim, both prices to two
    // decimals, and the integer percentage
    assert!(deal.text.contains("https://x.co/p"));
    assert!(deal.text.contains("₹499.00"));
    assert!(deal.text.contains("₹999.00"));
    assert!(deal.text.contains("You save 50%!"));
}

#[test]
fn test_generate_output_is_trimmed() {
    let deal = generate("https://x.co/p", "499", "999").unwrap();

    assert!(!deal.text.is_empty());
    assert_eq!(deal.text, deal.text.trim());
}

#[test]
fn test_prices_formatted_to_two_decimals() {
    // Integer and one-decimal input both render with exactly two decimals
    let deal = generate("https://x.co/p", "450", "999.5").unwrap();

    assert!(deal.text.contains("₹450.00"));
    assert!(deal.text.contains("₹999.50"));
}

#[test]
fn test_mega_steal_tier() {
    // discount = round((900 / 1000) * 100) = 90
    let deal = generate("https://x.co/p", "100.00", "1000.00").unwrap();

    assert_eq!(deal.discount_percentage, 90);
    assert_eq!(deal.tier, DiscountTier::MegaSteal);
    assert!(deal.text.contains("Mega Steal"));
    assert!(deal.text.contains("Massive saving of 90%!"));
}

#[test]
fn test_tier_boundary_exactly_50_is_dont_miss() {
    // discount = 50 exactly; 50 is not > 50, so this stays in the lower tier
    let deal = generate("https://x.co/p", "50", "100").unwrap();

    assert_eq!(deal.discount_percentage, 50);
    assert_eq!(deal.tier, DiscountTier::DontMiss);
}

#[test]
fn test_tier_boundary_50_point_5_rounds_up_to_mega_steal() {
    // discount = 50.5, rounds half away from zero to 51
    let deal = generate("https://x.co/p", "495", "1000").unwrap();

    assert_eq!(deal.discount_percentage, 51);
    assert_eq!(deal.tier, DiscountTier::MegaSteal);
}

#[test]
fn test_tier_boundary_exactly_30_is_hot_deal() {
    let deal = generate("https://x.co/p", "70", "100").unwrap();

    assert_eq!(deal.discount_percentage, 30);
    assert_eq!(deal.tier, DiscountTier::HotDeal);
    assert!(deal.text.contains("Hot Deal Alert"));
}

#[test]
fn test_tier_boundary_exactly_10_is_special_price() {
    let deal = generate("https://x.co/p", "180", "200").unwrap();

    assert_eq!(deal.discount_percentage, 10);
    assert_eq!(deal.tier, DiscountTier::SpecialPrice);
    assert!(deal.text.contains("Special Price Just For You"));
}

#[test]
fn test_tier_boundary_10_point_5_rounds_up_to_hot_deal() {
    // discount = 10.5, rounds half away from zero to 11
    let deal = generate("https://x.co/p", "895", "1000").unwrap();

    assert_eq!(deal.discount_percentage, 11);
    assert_eq!(deal.tier, DiscountTier::HotDeal);
}

#[test]
fn test_missing_fields() {
    let expected = "Please fill in the affiliate link, current price, and previous price.";

    for (link, current, previous) in [
        ("", "499", "999"),
        ("https://x.co/p", "", "999"),
        ("https://x.co/p", "499", ""),
        ("   ", "499", "999"),
    ] {
        let err = generate(link, current, previous).unwrap_err();
        assert_eq!(err, GenerateError::MissingField);
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn test_previous_not_greater_than_current() {
    let expected =
        "Please enter valid prices. Previous price must be greater than current price.";

    // previous < current
    let err = generate("https://x.co/p", "999", "499").unwrap_err();
    assert_eq!(err, GenerateError::InvalidPrice);
    assert_eq!(err.to_string(), expected);

    // previous == current
    let err = generate("https://x.co/p", "499", "499").unwrap_err();
    assert_eq!(err, GenerateError::InvalidPrice);
}

#[test]
fn test_non_numeric_prices() {
    let err = generate("https://x.co/p", "abc", "999").unwrap_err();
    assert_eq!(err, GenerateError::InvalidPrice);

    let err = generate("https://x.co/p", "499", "abc").unwrap_err();
    assert_eq!(err, GenerateError::InvalidPrice);
}

#[test]
fn test_non_finite_prices_rejected() {
    // "NaN" and "inf" parse as f64 but are not valid prices
    let err = generate("https://x.co/p", "NaN", "999").unwrap_err();
    assert_eq!(err, GenerateError::InvalidPrice);

    let err = generate("https://x.co/p", "499", "inf").unwrap_err();
    assert_eq!(err, GenerateError::InvalidPrice);
}

#[test]
fn test_missing_field_checked_before_price_validation() {
    // Blank link with unparseable prices still reports the missing field
    let err = generate("", "abc", "def").unwrap_err();
    assert_eq!(err, GenerateError::MissingField);
}

#[test]
fn test_generate_is_idempotent() {
    let first = generate("https://x.co/p", "499.00", "999.00").unwrap();
    let second = generate("https://x.co/p", "499.00", "999.00").unwrap();

    assert_eq!(first.text, second.text);
    assert_eq!(first.discount_percentage, second.discount_percentage);
    assert_eq!(first.tier, second.tier);
}
