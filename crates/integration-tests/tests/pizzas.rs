//! Integration tests for the pizza catalog endpoints.

use pizzeria_integration_tests::TestServer;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_empty_catalog() {
    let server = TestServer::start().await;

    let (status, body) = server.get_json("/pizzas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pizzas": [] }));
}

#[tokio::test]
async fn test_list_projects_known_fields() {
    let server = TestServer::start_with_catalog(&json!([
        { "id": 1, "name": "Margherita", "description": "Classic", "price": "8.00", "spicy": false }
    ]))
    .await;

    let (_, body) = server.get_json("/pizzas").await;
    assert_eq!(
        body,
        json!({ "pizzas": [
            { "id": 1, "name": "Margherita", "description": "Classic", "price": "8.00" }
        ]})
    );
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_on_empty_catalog() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/pizzas"))
        .json(&json!({
            "pizza": { "name": "Margherita", "description": "Classic", "price": "8.00" }
        }))
        .send()
        .await
        .expect("Failed to create pizza");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(
        body,
        json!({ "pizza": { "id": 1, "name": "Margherita", "description": "Classic", "price": "8.00" } })
    );
}

#[tokio::test]
async fn test_created_pizza_has_greater_id_and_is_listed() {
    let server = TestServer::start_with_catalog(&json!([
        { "id": 1, "name": "Margherita", "description": "Classic", "price": "8.00" },
        { "id": 2, "name": "Funghi", "description": "Mushrooms", "price": "9.50" }
    ]))
    .await;

    let created = server.create_pizza("Diavola", "Spicy salami", "11.00").await;
    assert_eq!(created["id"], 3);

    let (_, body) = server.get_json("/pizzas").await;
    let pizzas = body["pizzas"].as_array().expect("pizzas is an array");
    assert_eq!(pizzas.len(), 3);
    assert_eq!(pizzas.last(), Some(&created));
}

#[tokio::test]
async fn test_create_persists_to_file() {
    let server = TestServer::start().await;
    server.create_pizza("Margherita", "Classic", "8.00").await;

    let raw = tokio::fs::read_to_string(&server.data_file)
        .await
        .expect("catalog file exists");
    let stored: Value = serde_json::from_str(&raw).expect("catalog is JSON");
    assert_eq!(stored[0]["name"], "Margherita");
    assert_eq!(stored[0]["id"], 1);
}

#[tokio::test]
async fn test_create_without_pizza_wrapper() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/pizzas"))
        .json(&json!({ "name": "Margherita" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body, json!({ "message": "pizza is required" }));
}

#[tokio::test]
async fn test_create_with_falsy_pizza() {
    let server = TestServer::start().await;

    for pizza in [json!(null), json!(""), json!(0), json!(false)] {
        let resp = server
            .client
            .post(server.url("/pizzas"))
            .json(&json!({ "pizza": pizza }))
            .send()
            .await
            .expect("Request failed");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.expect("Invalid JSON");
        assert_eq!(body, json!({ "message": "pizza is required" }));
    }
}

#[tokio::test]
async fn test_create_with_non_object_pizza() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/pizzas"))
        .json(&json!({ "pizza": "Margherita" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body, json!({ "message": "Invalid data provided" }));
}

#[tokio::test]
async fn test_create_drops_unknown_fields() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/pizzas"))
        .json(&json!({
            "pizza": { "name": "Margherita", "description": "Classic", "price": "8.00", "vegan": true }
        }))
        .send()
        .await
        .expect("Failed to create pizza");
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert!(body["pizza"].get("vegan").is_none());

    let raw = tokio::fs::read_to_string(&server.data_file)
        .await
        .expect("catalog file exists");
    assert!(!raw.contains("vegan"));
}

#[tokio::test]
async fn test_create_with_blank_field() {
    let server = TestServer::start().await;

    for pizza in [
        json!({ "name": "  ", "description": "Classic", "price": "8.00" }),
        json!({ "name": "Margherita", "price": "8.00" }),
        json!({ "name": "Margherita", "description": "Classic", "price": "" }),
    ] {
        let resp = server
            .client
            .post(server.url("/pizzas"))
            .json(&json!({ "pizza": pizza }))
            .send()
            .await
            .expect("Request failed");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.expect("Invalid JSON");
        assert_eq!(body, json!({ "message": "Invalid data provided" }));
    }

    let (_, body) = server.get_json("/pizzas").await;
    assert_eq!(body, json!({ "pizzas": [] }));
}

#[tokio::test]
async fn test_create_with_malformed_json() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .post(server.url("/pizzas"))
        .header("content-type", "application/json")
        .body("{\"pizza\": ")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert!(body["message"].is_string());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_existing_pizza() {
    let server = TestServer::start().await;
    server.create_pizza("Margherita", "Classic", "8.00").await;
    server.create_pizza("Funghi", "Mushrooms", "9.50").await;

    let (status, body) = server.send_json(Method::DELETE, "/pizzas/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Pizza deleted" }));

    let (_, body) = server.get_json("/pizzas").await;
    assert_eq!(body["pizzas"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["pizzas"][0]["name"], "Funghi");
}

#[tokio::test]
async fn test_delete_uses_leading_digits_of_id() {
    let server = TestServer::start().await;
    server.create_pizza("Margherita", "Classic", "8.00").await;

    let (status, body) = server.send_json(Method::DELETE, "/pizzas/1x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Pizza deleted" }));

    let (_, body) = server.get_json("/pizzas").await;
    assert_eq!(body, json!({ "pizzas": [] }));
}

#[tokio::test]
async fn test_delete_missing_pizza_leaves_file_unchanged() {
    let server = TestServer::start().await;
    server.create_pizza("Margherita", "Classic", "8.00").await;
    let before = tokio::fs::read(&server.data_file).await.expect("catalog exists");

    for path in ["/pizzas/42", "/pizzas/margherita"] {
        let (status, body) = server.send_json(Method::DELETE, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Couldnt find a pizza" }));
    }

    let after = tokio::fs::read(&server.data_file).await.expect("catalog exists");
    assert_eq!(before, after);
}
