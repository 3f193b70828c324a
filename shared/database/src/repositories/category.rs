//! Category repository.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use comercio_models::Category;

pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let category: Option<Category> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch category by ID")?;

        Ok(category)
    }

    pub async fn find_all(&self) -> Result<Vec<Category>> {
        let categories: Vec<Category> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch all categories")?;

        Ok(categories)
    }

    pub async fn create(&self, category: Category) -> Result<Category> {
        let now = Utc::now();

        let created: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create category")?;

        Ok(created)
    }

    pub async fn update(&self, category: Category) -> Result<Option<Category>> {
        let updated: Option<Category> = sqlx::query_as(
            r#"
            UPDATE categories SET name = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update category")?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete category")?;

        Ok(result.rows_affected() > 0)
    }
}
