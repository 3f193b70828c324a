//! Product domain model.
//!
//! Every product belongs to exactly one category and one supplier; both
//! references are mandatory and checked before persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct Product {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Product name must not be blank"))]
    pub name: String,
    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    pub stock_quantity: i32,
    #[validate(range(min = 0.0, message = "Unit price must not be negative"))]
    pub unit_price: f64,
    pub category_id: Uuid,
    pub supplier_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, category_id: Uuid, supplier_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            stock_quantity: 0,
            unit_price: 0.0,
            category_id,
            supplier_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
