//! Category domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
#[serde(default)]
pub struct Category {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Category name must not be blank"))]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Category {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}
