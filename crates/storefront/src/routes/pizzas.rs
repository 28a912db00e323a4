//! Pizza catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use pizzeria_core::{Pizza, PizzaInput, parse_pizza_id};

use super::{ApiJson, MessageResponse};
use crate::db::RepositoryError;
use crate::error::{AppError, PIZZA_NOT_FOUND, Result};
use crate::state::AppState;

/// Create pizza request body: `{"pizza": {...}}`.
///
/// `pizza` is kept as raw JSON so that falsy values (`null`, `""`, `0`,
/// `false`) can be told apart from objects with bad fields.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePizzaRequest {
    #[serde(default)]
    pub pizza: Option<Value>,
}

impl CreatePizzaRequest {
    /// Extract the pizza fields.
    ///
    /// A truthy value that is not an object has no fields and fails
    /// validation later.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingBody` if `pizza` is absent or falsy, and
    /// `AppError::MalformedBody` if a field is not a string.
    pub fn into_input(self) -> Result<PizzaInput> {
        match self.pizza.filter(is_truthy) {
            None => Err(AppError::MissingBody),
            Some(value @ Value::Object(_)) => serde_json::from_value(value)
                .map_err(|e| AppError::MalformedBody(e.to_string())),
            Some(_) => Ok(PizzaInput::default()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `GET /pizzas` response body.
#[derive(Debug, Serialize)]
pub struct PizzaListResponse {
    pub pizzas: Vec<Pizza>,
}

/// `POST /pizzas` response body.
#[derive(Debug, Serialize)]
pub struct PizzaResponse {
    pub pizza: Pizza,
}

/// List the whole catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<PizzaListResponse>> {
    let pizzas = state.pizzas().list().await?;
    Ok(Json(PizzaListResponse { pizzas }))
}

/// Validate and append a pizza.
///
/// # Errors
///
/// Returns 400 if `pizza` is absent or any of its fields is blank.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreatePizzaRequest>,
) -> Result<Json<PizzaResponse>> {
    let new = body.into_input()?.validate()?;

    let pizza = state.pizzas().create(new).await?;
    tracing::info!(id = %pizza.id, name = %pizza.name, "new pizza added");

    Ok(Json(PizzaResponse { pizza }))
}

/// Delete a pizza by id.
///
/// # Errors
///
/// Returns 404 if the id has no leading integer or no pizza has it.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_pizza_id(&id).ok_or(AppError::NotFound(PIZZA_NOT_FOUND))?;

    match state.pizzas().delete(id).await {
        Ok(_) => {
            tracing::info!(%id, "pizza deleted");
            Ok(Json(MessageResponse {
                message: "Pizza deleted",
            }))
        }
        Err(RepositoryError::NotFound) => Err(AppError::NotFound(PIZZA_NOT_FOUND)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> CreatePizzaRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_falsy_pizza_is_missing() {
        for body in [
            json!({}),
            json!({ "pizza": null }),
            json!({ "pizza": "" }),
            json!({ "pizza": 0 }),
            json!({ "pizza": false }),
        ] {
            let err = request(body.clone()).into_input().unwrap_err();
            assert!(matches!(err, AppError::MissingBody), "{body}");
        }
    }

    #[test]
    fn test_truthy_non_object_has_no_fields() {
        for body in [json!({ "pizza": "margherita" }), json!({ "pizza": [1] })] {
            let input = request(body).into_input().unwrap();
            assert!(input.validate().is_err());
        }
    }

    #[test]
    fn test_object_pizza_is_read() {
        let input = request(json!({
            "pizza": { "name": "Margherita", "description": "Classic", "price": "8.00" }
        }))
        .into_input()
        .unwrap();
        assert_eq!(input.validate().unwrap().name, "Margherita");
    }

    #[test]
    fn test_non_string_field_is_malformed() {
        let err = request(json!({ "pizza": { "name": 5 } }))
            .into_input()
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedBody(_)));
    }
}
