//! Supplier domain model.
//!
//! A supplier carries the business-registration data fetched from the tax
//! registry (or submitted by hand) plus a street-level address. The CNPJ is
//! stored in the form it arrived in: bare 14 digits when the record was
//! created through registry enrichment, punctuated 18 characters when it was
//! submitted as a full payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
#[serde(default)]
pub struct Supplier {
    pub id: Uuid,
    #[validate(length(min = 1, max = 18, message = "CNPJ must not be blank"))]
    pub cnpj: String,
    #[validate(length(max = 255, message = "Legal name must be at most 255 characters"))]
    pub legal_name: String,
    pub trade_name: Option<String>,
    pub status: Option<String>,
    pub opening_date: Option<NaiveDate>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    pub entity_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Supplier {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            cnpj: String::new(),
            legal_name: String::new(),
            trade_name: None,
            status: None,
            opening_date: None,
            street: None,
            number: None,
            complement: None,
            district: None,
            city: None,
            state: None,
            postal_code: None,
            phone: None,
            email: None,
            entity_type: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Supplier {
    /// Creates a supplier with the given identifier and legal name.
    pub fn new(cnpj: String, legal_name: String) -> Self {
        Self {
            cnpj,
            legal_name,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_new() {
        let supplier = Supplier::new("12345678000199".to_string(), "Acme Ltda".to_string());
        assert_eq!(supplier.cnpj, "12345678000199");
        assert_eq!(supplier.legal_name, "Acme Ltda");
        assert!(supplier.opening_date.is_none());
    }

    #[test]
    fn test_supplier_email_validation() {
        let mut supplier = Supplier::new("12345678000199".to_string(), "Acme Ltda".to_string());
        supplier.email = Some("contact@acme.com.br".to_string());
        assert!(supplier.validate().is_ok());

        supplier.email = Some("not-an-email".to_string());
        assert!(supplier.validate().is_err());
    }

    #[test]
    fn test_supplier_blank_cnpj_rejected() {
        let supplier = Supplier::new(String::new(), "Acme Ltda".to_string());
        assert!(supplier.validate().is_err());
    }
}
