//! Product repository.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use comercio_models::Product;

const PRODUCT_COLUMNS: &str =
    "id, name, stock_quantity, unit_price, category_id, supplier_id, created_at, updated_at";

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let product: Option<Product> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch product by ID")?;

        Ok(product)
    }

    pub async fn find_all(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch all products")?;

        Ok(products)
    }

    pub async fn create(&self, product: Product) -> Result<Product> {
        let now = Utc::now();

        let created: Product = sqlx::query_as(&format!(
            r#"
            INSERT INTO products
                (id, name, stock_quantity, unit_price, category_id, supplier_id,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(product.stock_quantity)
        .bind(product.unit_price)
        .bind(product.category_id)
        .bind(product.supplier_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create product")?;

        Ok(created)
    }

    pub async fn update(&self, product: Product) -> Result<Option<Product>> {
        let updated: Option<Product> = sqlx::query_as(&format!(
            r#"
            UPDATE products SET
                name = $2,
                stock_quantity = $3,
                unit_price = $4,
                category_id = $5,
                supplier_id = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(product.stock_quantity)
        .bind(product.unit_price)
        .bind(product.category_id)
        .bind(product.supplier_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update product")?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete product")?;

        Ok(result.rows_affected() > 0)
    }
}
