//! Category endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use comercio_database::CategoryRepository;
use comercio_models::Category;
use comercio_utils::{validate_model, CatalogError};

use crate::{handlers::ApiError, AppState};

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let repo = CategoryRepository::new(state.pool.clone());
    let categories = repo.find_all().await?;

    if categories.is_empty() {
        return Err(CatalogError::not_found("no categories registered").into());
    }
    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    let repo = CategoryRepository::new(state.pool.clone());
    let category = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("category with id {id}")))?;

    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(category): Json<Category>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    validate_model(&category)?;

    let repo = CategoryRepository::new(state.pool.clone());
    let created = repo.create(category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Json(category): Json<Category>,
) -> Result<Json<Category>, ApiError> {
    validate_model(&category)?;

    let repo = CategoryRepository::new(state.pool.clone());
    let id = category.id;
    let updated = repo
        .update(category)
        .await?
        .ok_or_else(|| CatalogError::not_found(format!("category with id {id}")))?;

    Ok(Json(updated))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = CategoryRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(CatalogError::not_found(format!("category with id {id}")).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
