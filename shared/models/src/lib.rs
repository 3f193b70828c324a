//! # Comercio Domain Models
//!
//! Core domain models for the catalog backend: suppliers, categories, and
//! products. All models serialize with serde, carry field rules for the
//! validator crate, and map to their PostgreSQL rows via `sqlx::FromRow`.

pub mod category;
pub mod product;
pub mod supplier;

pub use category::*;
pub use product::*;
pub use supplier::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_serializes_opening_date_as_plain_date() {
        let mut supplier = Supplier::new("12345678000199".to_string(), "Acme Ltda".to_string());
        supplier.opening_date = chrono::NaiveDate::from_ymd_opt(2010, 3, 15);

        let json = serde_json::to_value(&supplier).unwrap();
        assert_eq!(json["opening_date"], "2010-03-15");
        assert_eq!(json["cnpj"], "12345678000199");
    }
}
