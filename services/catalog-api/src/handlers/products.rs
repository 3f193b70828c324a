//! Product endpoints.
//!
//! The category and supplier references are mandatory; their absence is a
//! missing-field error raised before touching the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use comercio_database::ProductRepository;
use comercio_models::Product;
use comercio_utils::{validate_model, CatalogError, CatalogResult};

use crate::{handlers::ApiError, AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct ProductPayload {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 255, message = "Product name must not be blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    pub stock_quantity: i32,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Unit price must not be negative"))]
    pub unit_price: f64,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
}

impl ProductPayload {
    fn into_product(self) -> CatalogResult<Product> {
        let category_id = self
            .category_id
            .ok_or_else(|| CatalogError::missing_field("category_id"))?;
        let supplier_id = self
            .supplier_id
            .ok_or_else(|| CatalogError::missing_field("supplier_id"))?;

        let mut product = Product::new(self.name, category_id, supplier_id);
        if let Some(id) = self.id {
            product.id = id;
        }
        product.stock_quantity = self.stock_quantity;
        product.unit_price = self.unit_price;
        Ok(product)
    }
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = repo.find_all().await?;

    if products.is_empty() {
        return Err(CatalogError::not_found("no products registered").into());
    }
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("product with id {id}")))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    validate_model(&payload)?;
    let product = payload.into_product()?;

    let repo = ProductRepository::new(state.pool.clone());
    let created = repo.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    validate_model(&payload)?;
    let id = payload
        .id
        .ok_or_else(|| CatalogError::missing_field("id"))?;
    let product = payload.into_product()?;

    let repo = ProductRepository::new(state.pool.clone());
    let updated = repo
        .update(product)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("product with id {id}")))?;

    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(CatalogError::not_found(format!("product with id {id}")).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
