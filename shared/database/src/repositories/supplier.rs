//! Supplier repository.
//!
//! CRUD operations for supplier records. Uses runtime SQL queries
//! (unchecked) to avoid requiring DATABASE_URL at compile time.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use comercio_models::Supplier;

const SUPPLIER_COLUMNS: &str = "id, cnpj, legal_name, trade_name, status, opening_date, \
     street, number, complement, district, city, state, postal_code, \
     phone, email, entity_type, created_at, updated_at";

pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find supplier by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>> {
        let supplier: Option<Supplier> = sqlx::query_as(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch supplier by ID")?;

        Ok(supplier)
    }

    /// Find supplier by CNPJ (stored form, bare or punctuated)
    pub async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Supplier>> {
        let supplier: Option<Supplier> = sqlx::query_as(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE cnpj = $1"
        ))
        .bind(cnpj)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch supplier by CNPJ")?;

        Ok(supplier)
    }

    /// Find all suppliers
    pub async fn find_all(&self) -> Result<Vec<Supplier>> {
        let suppliers: Vec<Supplier> = sqlx::query_as(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers ORDER BY legal_name"
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch all suppliers")?;

        Ok(suppliers)
    }

    /// Create new supplier
    pub async fn create(&self, supplier: Supplier) -> Result<Supplier> {
        let now = Utc::now();

        let created: Supplier = sqlx::query_as(&format!(
            r#"
            INSERT INTO suppliers
                (id, cnpj, legal_name, trade_name, status, opening_date,
                 street, number, complement, district, city, state, postal_code,
                 phone, email, entity_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18)
            RETURNING {SUPPLIER_COLUMNS}
            "#
        ))
        .bind(supplier.id)
        .bind(&supplier.cnpj)
        .bind(&supplier.legal_name)
        .bind(&supplier.trade_name)
        .bind(&supplier.status)
        .bind(supplier.opening_date)
        .bind(&supplier.street)
        .bind(&supplier.number)
        .bind(&supplier.complement)
        .bind(&supplier.district)
        .bind(&supplier.city)
        .bind(&supplier.state)
        .bind(&supplier.postal_code)
        .bind(&supplier.phone)
        .bind(&supplier.email)
        .bind(&supplier.entity_type)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create supplier")?;

        Ok(created)
    }

    /// Update existing supplier; returns None when no row matches the ID
    pub async fn update(&self, supplier: Supplier) -> Result<Option<Supplier>> {
        let updated: Option<Supplier> = sqlx::query_as(&format!(
            r#"
            UPDATE suppliers SET
                cnpj = $2,
                legal_name = $3,
                trade_name = $4,
                status = $5,
                opening_date = $6,
                street = $7,
                number = $8,
                complement = $9,
                district = $10,
                city = $11,
                state = $12,
                postal_code = $13,
                phone = $14,
                email = $15,
                entity_type = $16,
                updated_at = $17
            WHERE id = $1
            RETURNING {SUPPLIER_COLUMNS}
            "#
        ))
        .bind(supplier.id)
        .bind(&supplier.cnpj)
        .bind(&supplier.legal_name)
        .bind(&supplier.trade_name)
        .bind(&supplier.status)
        .bind(supplier.opening_date)
        .bind(&supplier.street)
        .bind(&supplier.number)
        .bind(&supplier.complement)
        .bind(&supplier.district)
        .bind(&supplier.city)
        .bind(&supplier.state)
        .bind(&supplier.postal_code)
        .bind(&supplier.phone)
        .bind(&supplier.email)
        .bind(&supplier.entity_type)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update supplier")?;

        Ok(updated)
    }

    /// Delete supplier by ID
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete supplier")?;

        Ok(result.rows_affected() > 0)
    }
}
