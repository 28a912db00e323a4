//! Cart route handlers.
//!
//! The cart is shared by every client of the process. Add and remove answer
//! with the bare item array; listing wraps it in `{"cart": [...]}`.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use pizzeria_core::{CartItem, parse_pizza_id};

use super::MessageResponse;
use crate::error::{AppError, NOT_IN_CART, PRODUCT_NOT_FOUND, Result, add_breadcrumb};
use crate::state::AppState;

/// `GET /cart` response body.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: Vec<CartItem>,
}

/// Show the cart, then run the inactivity check.
///
/// An idle cart has already been emptied by the activity middleware, so
/// the response never shows stale items.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartResponse> {
    let cart = state.cart().list();
    state.cart().expire_if_idle();
    Json(CartResponse { cart })
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cart().clear();
    tracing::info!("cart cleared");
    Json(MessageResponse {
        message: "Cart cleared successfully",
    })
}

/// Add one unit of a catalog pizza.
///
/// # Errors
///
/// Returns 404 if the pizza is not in the catalog.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CartItem>>> {
    let id = parse_pizza_id(&id).ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;

    let pizza = state
        .pizzas()
        .find(id)
        .await?
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;

    let items = state.cart().add(&pizza);
    let pizza_id = id.to_string();
    add_breadcrumb(
        "cart",
        "Added pizza to cart",
        Some(&[("pizza_id", pizza_id.as_str())]),
    );

    Ok(Json(items))
}

/// Remove one unit of a pizza from the cart, then run the inactivity check.
///
/// # Errors
///
/// Returns 404 if the pizza is not in the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CartItem>>> {
    let id = parse_pizza_id(&id).ok_or(AppError::NotFound(NOT_IN_CART))?;

    state.cart().remove_one(id)?;
    state.cart().expire_if_idle();
    let pizza_id = id.to_string();
    add_breadcrumb(
        "cart",
        "Removed pizza from cart",
        Some(&[("pizza_id", pizza_id.as_str())]),
    );

    Ok(Json(state.cart().list()))
}
