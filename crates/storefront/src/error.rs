//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`; every error body is JSON of the form
//! `{"message": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use pizzeria_core::PizzaError;

use crate::db::RepositoryError;
use crate::services::CartError;

/// Message for a delete against an unknown pizza id.
pub const PIZZA_NOT_FOUND: &str = "Couldnt find a pizza";
/// Message for adding an unknown pizza id to the cart.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
/// Message for removing a pizza that is not in the cart.
pub const NOT_IN_CART: &str = "Couldnt find a pizza in the cart";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body has no `pizza` object.
    #[error("pizza is required")]
    MissingBody,

    /// A required pizza field is missing or blank.
    #[error("Invalid data provided")]
    InvalidInput(#[from] PizzaError),

    /// The body is not valid JSON for the endpoint.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// No pizza or cart line matches the id.
    #[error("{0}")]
    NotFound(&'static str),

    /// Catalog file operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::NotInCart(_) => Self::NotFound(NOT_IN_CART),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Repository(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status = match &self {
            Self::MissingBody | Self::InvalidInput(_) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Repository(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added pizza to cart", Some(&[("pizza_id", "3")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
