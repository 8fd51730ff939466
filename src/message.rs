//! Deal message generation
//!
//! This module contains the core logic of the application: a pure function
//! that turns an affiliate link and two prices into a formatted promotional
//! message. It performs no I/O and holds no state, so it can be tested
//! deterministically without the HTTP layer.

use thiserror::Error;

/// Currency symbol prefixed to both prices in every template
const CURRENCY_SYMBOL: &str = "₹";

/// Validation failures reported by [`generate`]
///
/// Both variants are non-fatal and purely informational. The `Display`
/// implementation is the exact user-visible text, so callers can render
/// the error directly without mapping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// One or more of the three required inputs is empty or blank
    #[error("Please fill in the affiliate link, current price, and previous price.")]
    MissingField,

    /// A price failed to parse as a finite number, or the previous price
    /// is not strictly greater than the current price
    #[error("Please enter valid prices. Previous price must be greater than current price.")]
    InvalidPrice,
}

impl GenerateError {
    /// Stable machine-readable code for the API error body
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::MissingField => "missing_field",
            GenerateError::InvalidPrice => "invalid_price",
        }
    }
}

/// Discount tiers, mutually exclusive, selected by integer discount percentage
///
/// | Condition   | Tier            |
/// |-------------|-----------------|
/// | d > 50      | `MegaSteal`     |
/// | 30 < d ≤ 50 | `DontMiss`      |
/// | 10 < d ≤ 30 | `HotDeal`       |
/// | d ≤ 10      | `SpecialPrice`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTier {
    MegaSteal,
    DontMiss,
    HotDeal,
    SpecialPrice,
}

impl DiscountTier {
    /// Selects the tier for a rounded discount percentage
    ///
    /// Conditions are evaluated in priority order, so each percentage maps
    /// to exactly one tier. Boundary values (50, 30, 10) fall into the
    /// lower tier because the comparisons are strict.
    pub fn for_discount(discount_percentage: i64) -> Self {
        if discount_percentage > 50 {
            DiscountTier::MegaSteal
        } else if discount_percentage > 30 {
            DiscountTier::DontMiss
        } else if discount_percentage > 10 {
            DiscountTier::HotDeal
        } else {
            DiscountTier::SpecialPrice
        }
    }

    /// Human-readable tier label used in the API response
    pub fn label(&self) -> &'static str {
        match self {
            DiscountTier::MegaSteal => "Mega Steal",
            DiscountTier::DontMiss => "Don't Miss",
            DiscountTier::HotDeal => "Hot Deal Alert",
            DiscountTier::SpecialPrice => "Special Price",
        }
    }
}

/// A successfully generated promotional message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealMessage {
    /// The formatted multi-line message, trimmed of surrounding whitespace
    pub text: String,

    /// Integer discount percentage the message advertises
    pub discount_percentage: i64,

    /// Tier whose template produced the text
    pub tier: DiscountTier,
}

/// Generates a promotional message from an affiliate link and two prices
///
/// Validation rules, applied in order:
///
/// 1. All three inputs must be non-blank, otherwise
///    [`GenerateError::MissingField`].
/// 2. Both prices must parse as finite numbers and the previous price must
///    be strictly greater than the current price, otherwise
///    [`GenerateError::InvalidPrice`].
///
/// The discount percentage is `round(((previous - current) / previous) * 100)`
/// where rounding is `f64::round`, i.e. half away from zero. A computed
/// discount of exactly 50.5 therefore rounds to 51 and lands in the higher
/// tier.
///
/// The function is pure: identical inputs always yield byte-identical output.
///
/// # Example
///
/// ```
/// use dealgen::message::{generate, DiscountTier};
///
/// let deal = generate("https://x.co/p", "499.00", "999.00").unwrap();
/// assert_eq!(deal.discount_percentage, 50);
/// assert_eq!(deal.tier, DiscountTier::DontMiss);
/// ```
pub fn generate(
    link: &str,
    current_raw: &str,
    previous_raw: &str,
) -> Result<DealMessage, GenerateError> {
    let link = link.trim();
    let current_raw = current_raw.trim();
    let previous_raw = previous_raw.trim();

    if link.is_empty() || current_raw.is_empty() || previous_raw.is_empty() {
        return Err(GenerateError::MissingField);
    }

    let current: f64 = current_raw
        .parse()
        .map_err(|_| GenerateError::InvalidPrice)?;
    let previous: f64 = previous_raw
        .parse()
        .map_err(|_| GenerateError::InvalidPrice)?;

    // "NaN" and "inf" parse successfully but are not valid prices
    if !current.is_finite() || !previous.is_finite() || previous <= current {
        return Err(GenerateError::InvalidPrice);
    }

    let discount_percentage = (((previous - current) / previous) * 100.0).round() as i64;

    let tier = DiscountTier::for_discount(discount_percentage);
    let text = render_template(tier, link, current, previous, discount_percentage);

    Ok(DealMessage {
        text,
        discount_percentage,
        tier,
    })
}

/// Renders the fixed template for a tier
///
/// The four templates differ only in wording and emoji; each interpolates
/// the link verbatim, both prices to exactly two decimal places with the
/// currency symbol, and the integer percentage.
fn render_template(
    tier: DiscountTier,
    link: &str,
    current: f64,
    previous: f64,
    discount: i64,
) -> String {
    let current = format!("{CURRENCY_SYMBOL}{current:.2}");
    let previous = format!("{CURRENCY_SYMBOL}{previous:.2}");

    match tier {
        DiscountTier::MegaSteal => format!(
            "🎯 Mega Steal! Over 50% Off! 🎯\n\
             This is one offer you don't want to miss—grab your favorite product at half price or less!\n\
             🔗 Get yours: {link}\n\
             💰 Current Price: {current}\n\
             💸 Previous Price: {previous}\n\
             🔥 Massive saving of {discount}%! 🔥\n\
             Limited time—go grab the deal now!\n\
             Thanks for following TR Deals ❤️"
        ),
        DiscountTier::DontMiss => format!(
            "🛍️ Don't Miss This Deal! 🛍️\n\
             Grab this awesome product now at a big discount!\n\
             🔗 Buy here: {link}\n\
             💰 Current Price: {current}\n\
             💸 Previous Price: {previous}\n\
             🔥 You save {discount}%! 🔥\n\
             Stay tuned for more amazing deals every day!\n\
             Thanks for being part of TR Deals!"
        ),
        DiscountTier::HotDeal => format!(
            "🎉 Hot Deal Alert! 🎉\n\
             \n\
             Snag this fantastic product at an unbeatable price!\n\
             \n\
             🔗 Grab it here: {link}\n\
             💰 Current Price: {current}\n\
             💸 Previous Price: {previous}\n\
             \n\
             🔥 Save {discount}% today! 🔥\n\
             \n\
             Don't miss out — check back daily for fresh, amazing deals!\n\
             \n\
             Thanks for being with TR Deals!"
        ),
        DiscountTier::SpecialPrice => format!(
            "✨ Special Price Just For You! ✨\n\
             Treat yourself today—this product comes with a nice little saving!\n\
             🔗 Shop here: {link}\n\
             💰 Current Price: {current}\n\
             💸 Previous Price: {previous}\n\
             You save {discount}%—every bit counts!\n\
             Stay tuned with TR Deals for more offers every day!"
        ),
    }
}
