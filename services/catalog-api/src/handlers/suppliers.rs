//! Supplier endpoints.
//!
//! Two creation paths with intentionally different identifier rules: the
//! registry path takes a bare 14-digit CNPJ as a query parameter, the
//! full-payload path requires the punctuated 18-character form.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use comercio_database::SupplierRepository;
use comercio_models::Supplier;
use comercio_utils::{is_formatted_cnpj, validate_model, CatalogError};

use crate::{handlers::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateSupplierParams {
    pub cnpj: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAddressParams {
    pub cep: Option<String>,
}

pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    let repo = SupplierRepository::new(state.pool.clone());
    let suppliers = repo.find_all().await?;

    if suppliers.is_empty() {
        return Err(CatalogError::not_found("no suppliers registered").into());
    }
    Ok(Json(suppliers))
}

pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Supplier>, ApiError> {
    let repo = SupplierRepository::new(state.pool.clone());
    let supplier = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("supplier with id {id}")))?;

    Ok(Json(supplier))
}

/// Create a supplier from the tax registry, keyed by a bare CNPJ.
pub async fn create_supplier_from_registry(
    State(state): State<AppState>,
    Query(params): Query<CreateSupplierParams>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    let cnpj = params.cnpj.unwrap_or_default();
    let supplier = state.enrichment.supplier_from_registry(&cnpj).await?;

    let repo = SupplierRepository::new(state.pool.clone());
    let created = repo.create(supplier).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Create a supplier from a full payload; the CNPJ must be punctuated.
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(supplier): Json<Supplier>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    validate_model(&supplier)?;
    if !is_formatted_cnpj(&supplier.cnpj) {
        return Err(CatalogError::invalid_cnpj(
            "CNPJ must have 18 characters including dots, slash and dash",
        )
        .into());
    }

    let repo = SupplierRepository::new(state.pool.clone());
    let created = repo.create(supplier).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_supplier(
    State(state): State<AppState>,
    Json(supplier): Json<Supplier>,
) -> Result<Json<Supplier>, ApiError> {
    validate_model(&supplier)?;

    let repo = SupplierRepository::new(state.pool.clone());
    let id = supplier.id;
    let updated = repo
        .update(supplier)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("supplier with id {id}")))?;

    Ok(Json(updated))
}

/// Rewrite a supplier's address from a postal-code lookup and persist it.
pub async fn update_supplier_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UpdateAddressParams>,
) -> Result<Json<Supplier>, ApiError> {
    let cep = params
        .cep
        .filter(|cep| !cep.is_empty())
        .ok_or_else(|| CatalogError::missing_field("cep"))?;

    let repo = SupplierRepository::new(state.pool.clone());
    let supplier = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("supplier with id {id}")))?;

    let merged = state.enrichment.update_address(&supplier, &cep).await?;
    let updated = repo
        .update(merged)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("supplier with id {id}")))?;

    Ok(Json(updated))
}

pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = SupplierRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(CatalogError::not_found(format!("supplier with id {id}")).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
