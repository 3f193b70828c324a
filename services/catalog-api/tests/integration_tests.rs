//! Catalog API integration tests.
//!
//! End-to-end tests against a running service instance (and its database).
//! All tests are ignored by default; run them with `cargo test -- --ignored`
//! once the service is up.

use serde_json::json;

/// Test configuration
pub struct TestConfig {
    pub base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
        }
    }
}

#[tokio::test]
#[ignore] // Requires a running service
async fn test_health_check() {
    let config = TestConfig::default();
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", config.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

/// Full enrichment flow: create a supplier from the registry by CNPJ, then
/// rewrite its address from a postal-code lookup.
#[tokio::test]
#[ignore] // Requires a running service with reachable external APIs
async fn test_supplier_enrichment_flow() {
    let config = TestConfig::default();
    let client = reqwest::Client::new();

    // Step 1: create from the registry
    let response = client
        .post(format!(
            "{}/api/v1/suppliers?cnpj=06990590000123",
            config.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let supplier: serde_json::Value = response.json().await.unwrap();
    assert_eq!(supplier["cnpj"], "06990590000123");
    let id = supplier["id"].as_str().unwrap().to_string();

    // Step 2: update the address by CEP
    let response = client
        .put(format!(
            "{}/api/v1/suppliers/{}/address?cep=01310100",
            config.base_url, id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["cnpj"], "06990590000123");
    assert!(updated["street"].as_str().is_some());
}

#[tokio::test]
#[ignore] // Requires a running service
async fn test_create_supplier_rejects_short_cnpj() {
    let config = TestConfig::default();
    let client = reqwest::Client::new();

    let response = client
        .post(format!(
            "{}/api/v1/suppliers?cnpj=1234567800019",
            config.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_CNPJ");
}

#[tokio::test]
#[ignore] // Requires a running service
async fn test_complete_supplier_requires_formatted_cnpj() {
    let config = TestConfig::default();
    let client = reqwest::Client::new();

    // Bare CNPJ on the full-payload entry point must be rejected
    let response = client
        .post(format!("{}/api/v1/suppliers/complete", config.base_url))
        .json(&json!({
            "cnpj": "12345678000199",
            "legal_name": "Acme Ltda"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore] // Requires a running service
async fn test_category_crud() {
    let config = TestConfig::default();
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/categories", config.base_url))
        .json(&json!({"name": "Bebidas"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let category: serde_json::Value = response.json().await.unwrap();
    let id = category["id"].as_str().unwrap().to_string();

    let response = client
        .get(format!("{}/api/v1/categories/{}", config.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .delete(format!("{}/api/v1/categories/{}", config.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
}
