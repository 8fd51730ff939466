//! Route definitions for the deal message generator
//!
//! This module configures all HTTP routes and maps them to their respective
//! handlers. The service is stateless, so the router carries no shared state.

use axum::routing::{get, post};
use axum::Router;

use crate::handler::{generate_message, index};

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET /` - Serves the form page
/// - `POST /api/messages` - Generates a promotional message from form input
///
/// # Returns
///
/// Configured Axum Router ready to handle requests
///
/// # Example Usage
///
/// ```no_run
/// # use dealgen::route::create_app;
/// let app = create_app();
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app() -> Router {
    let api_routes = Router::new().route("/messages", post(generate_message));

    Router::new()
        // The form page the user interacts with
        .route("/", get(index))
        // Mount API routes under /api
        .nest("/api", api_routes)
}
