use crate::common::spawn_app;
use claims::assert_ok;
use storefront_e2e::api::{response_body, verify_status_code};

#[derive(serde::Deserialize)]
struct ProductsList {
    products: Vec<serde_json::Value>,
}

#[derive(serde::Deserialize)]
struct BrandsList {
    brands: Vec<serde_json::Value>,
}

#[tokio::test]
async fn products_list_returns_a_non_empty_catalog() {
    // Arrange
    let app = spawn_app().await;
    // Act
    let response = assert_ok!(app.api.client().get("/api/productsList", &[]).await);
    // Assert
    assert_ok!(verify_status_code(&response, 200));
    let body: ProductsList = assert_ok!(response_body(response).await);
    assert!(!body.products.is_empty());
}

#[tokio::test]
async fn every_product_carries_name_and_price() {
    // Arrange
    let app = spawn_app().await;
    // Act
    let response = assert_ok!(app.api.client().get("/api/productsList", &[]).await);
    let body: ProductsList = assert_ok!(response_body(response).await);
    // Assert
    for product in &body.products {
        assert!(product.get("name").is_some_and(|n| n.is_string()));
        assert!(product.get("price").is_some_and(|p| p.is_string()));
    }
}

#[tokio::test]
async fn brands_list_has_the_expected_shape() {
    // Arrange
    let app = spawn_app().await;
    // Act
    let response = assert_ok!(app.api.client().get("/api/brandsList", &[]).await);
    // Assert
    assert_ok!(verify_status_code(&response, 200));
    // Deserializing proves `brands` is present and an array.
    let _body: BrandsList = assert_ok!(response_body(response).await);
}
