//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                 - Front-end entry point (index.html)
//! GET    /health           - Health check
//!
//! # Pizzas (catalog file)
//! GET    /pizzas           - List pizzas
//! POST   /pizzas           - Create pizza
//! DELETE /pizzas/{id}      - Delete pizza
//!
//! # Cart (shared, in memory)
//! GET    /cart             - Cart contents (then inactivity check)
//! GET    /clear-cart       - Empty the cart
//! POST   /cart/{id}        - Add one pizza
//! DELETE /cart/{id}        - Remove one pizza
//!
//! # Everything else
//! GET    /*                - Static files from the front-end build
//! ```

pub mod cart;
pub mod pizzas;

use axum::{
    Router,
    extract::FromRequest,
    routing::{get, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// JSON extractor whose rejections become [`AppError::MalformedBody`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Body of responses that only carry a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create the pizza catalog routes.
pub fn pizza_routes() -> Router<AppState> {
    Router::new()
        .route("/pizzas", get(pizzas::index).post(pizzas::create))
        .route("/pizzas/{id}", axum::routing::delete(pizzas::destroy))
}

/// Create the cart routes.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/clear-cart", get(cart::clear))
        .route("/cart/{id}", post(cart::add).delete(cart::remove))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().merge(pizza_routes()).merge(cart_routes())
}
