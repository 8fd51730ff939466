//! Data models for the deal message generator
//!
//! This module defines the request and response structures exchanged over
//! the HTTP API. Generation is stateless, so there are no stored records;
//! every structure lives for a single request/response cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for generating a promotional message
///
/// All three fields are raw strings exactly as entered in the form. The
/// prices are parsed and validated by the generator, not during
/// deserialization, so a non-numeric price produces the generator's
/// validation message rather than a deserialization failure.
///
/// # Example
/// ```json
/// {
///   "affiliate_link": "https://affiliate.link/product",
///   "current_price": "499.00",
///   "previous_price": "999.00"
/// }
/// ```
#[derive(Deserialize)]
pub struct GenerateRequest {
    /// The affiliate link interpolated verbatim into the message
    pub affiliate_link: String,

    /// Current price of the product, as typed by the user
    pub current_price: String,

    /// Previous (pre-discount) price of the product, as typed by the user
    pub previous_price: String,
}

/// Response returned after successfully generating a message
///
/// # Example
/// ```json
/// {
///   "message": "🛍️ Don't Miss This Deal! 🛍️\n...",
///   "discount_percentage": 50,
///   "tier": "Don't Miss",
///   "generated_at": "2026-01-17T13:40:00Z"
/// }
/// ```
#[derive(Serialize)]
pub struct GenerateResponse {
    /// The formatted promotional text block, ready to paste into a channel
    pub message: String,

    /// Integer discount percentage computed from the two prices
    pub discount_percentage: i64,

    /// Display label of the tier whose template was used
    pub tier: String,

    /// Timestamp when the message was generated
    pub generated_at: DateTime<Utc>,
}
