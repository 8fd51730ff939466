//! HTTP request handlers for the deal message API
//!
//! This module wires the pure message generator to the HTTP surface:
//! - Serving the form page
//! - Generating promotional messages from form input

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::message::generate;
use crate::model::{GenerateRequest, GenerateResponse};

/// Serves the form page
///
/// The page contains the three inputs (affiliate link, current price,
/// previous price), calls `POST /api/messages` on the generate action, and
/// copies the result to the clipboard with the browser's native clipboard
/// API. It is embedded in the binary at compile time so the service ships
/// as a single file.
pub async fn index() -> impl IntoResponse {
    Html(include_str!("../static/index.html"))
}

/// Generates a promotional message
///
/// This handler:
/// 1. Accepts the affiliate link and both prices as raw strings
/// 2. Invokes the pure generator, which validates and formats
/// 3. Returns the generated text with its discount metadata
///
/// # Request Body
///
/// ```json
/// {
///   "affiliate_link": "https://affiliate.link/product",
///   "current_price": "499.00",
///   "previous_price": "999.00"
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - Message generated; body carries `message`,
///   `discount_percentage`, `tier`, and `generated_at`
/// - **422 Unprocessable Entity** - Validation failed; body carries the
///   user-visible `error` text and a machine-readable `code`
///   (`missing_field` or `invalid_price`)
///
/// Success and validation failure are deliberately separate shapes so the
/// form can style errors differently from generated output.
pub async fn generate_message(Json(payload): Json<GenerateRequest>) -> impl IntoResponse {
    match generate(
        &payload.affiliate_link,
        &payload.current_price,
        &payload.previous_price,
    ) {
        Ok(deal) => {
            tracing::debug!(
                discount = deal.discount_percentage,
                tier = deal.tier.label(),
                "generated deal message"
            );

            let response = GenerateResponse {
                message: deal.text,
                discount_percentage: deal.discount_percentage,
                tier: deal.tier.label().to_string(),
                generated_at: Utc::now(),
            };

            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            tracing::warn!(code = err.code(), "rejected generate request");

            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": err.to_string(),
                    "code": err.code()
                })),
            )
                .into_response()
        }
    }
}
