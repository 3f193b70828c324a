//! Supplier enrichment pipeline.
//!
//! Turns a bare CNPJ into a persistence-ready supplier: validate the
//! identifier, fetch the registration record from the tax registry, map it
//! into the domain shape. A companion flow rewrites a supplier's address
//! from a postal-code lookup. Each entry point is a single stateless pass;
//! the caller persists the returned value.

use chrono::{NaiveDate, Utc};
use tracing::warn;

use comercio_models::Supplier;
use comercio_utils::{is_bare_cnpj, CatalogError, CatalogResult};

use crate::postal_client::{PostalClient, PostalRecord};
use crate::registry_client::{RegistrationRecord, RegistryClient};

const OPENING_DATE_FORMAT: &str = "%d/%m/%Y";

/// Result of mapping a raw registration record.
///
/// `opening_date_fallback` is set when the record's opening-date string did
/// not parse and the current date was substituted for it.
#[derive(Debug, Clone)]
pub struct MappedRegistration {
    pub supplier: Supplier,
    pub opening_date_fallback: bool,
}

/// Map a raw registration record into a supplier. Pure, no I/O.
///
/// The CNPJ is left empty: the record's own identifier may be punctuated, so
/// the caller assigns the canonical bare-digit lookup key.
pub fn map_registration(record: &RegistrationRecord) -> MappedRegistration {
    let (opening_date, opening_date_fallback) = match record
        .opening_date
        .as_deref()
        .map(|raw| NaiveDate::parse_from_str(raw, OPENING_DATE_FORMAT))
    {
        Some(Ok(date)) => (date, false),
        _ => (Utc::now().date_naive(), true),
    };

    let supplier = Supplier {
        legal_name: record.legal_name.clone().unwrap_or_default(),
        trade_name: record.trade_name.clone(),
        status: record.registration_status.clone(),
        opening_date: Some(opening_date),
        street: record.street.clone(),
        number: record.number.clone(),
        complement: record.complement.clone(),
        district: record.district.clone(),
        city: record.city.clone(),
        state: record.state.clone(),
        postal_code: record.postal_code.clone(),
        phone: record.phone.clone(),
        email: record.email.clone(),
        entity_type: record.entity_type.clone(),
        ..Supplier::default()
    };

    MappedRegistration {
        supplier,
        opening_date_fallback,
    }
}

/// Overwrite a supplier's street, district, city, state and postal code from
/// a fetched postal record, leaving every other field as it was. The
/// complement is taken only when the record carries a non-empty one.
pub fn apply_postal_address(supplier: &Supplier, record: PostalRecord) -> Supplier {
    let mut updated = supplier.clone();
    updated.street = record.street;
    updated.district = record.district;
    updated.city = record.city;
    updated.state = record.state;
    updated.postal_code = record.postal_code;
    if let Some(complement) = record.complement.filter(|c| !c.is_empty()) {
        updated.complement = Some(complement);
    }
    updated
}

/// Coordinates the registry and postal lookups.
///
/// Holds no per-request state; both clients share one transport handle
/// constructed at startup.
#[derive(Clone)]
pub struct EnrichmentService {
    registry: RegistryClient,
    postal: PostalClient,
}

impl EnrichmentService {
    pub fn new(registry: RegistryClient, postal: PostalClient) -> Self {
        Self { registry, postal }
    }

    /// Build a persistence-ready supplier from a bare 14-digit CNPJ.
    ///
    /// The identifier is validated before any network call is attempted.
    pub async fn supplier_from_registry(&self, cnpj: &str) -> CatalogResult<Supplier> {
        if cnpj.is_empty() {
            return Err(CatalogError::missing_field("cnpj"));
        }
        if !is_bare_cnpj(cnpj) {
            return Err(CatalogError::invalid_cnpj(
                "CNPJ must be exactly 14 digits, without dots, slashes or dashes",
            ));
        }

        let record = self.registry.lookup(cnpj).await?;
        if record.is_error() {
            return Err(CatalogError::not_found(format!(
                "registration for CNPJ {cnpj}"
            )));
        }

        let mapped = map_registration(&record);
        if mapped.opening_date_fallback {
            warn!(
                cnpj,
                raw = record.opening_date.as_deref().unwrap_or(""),
                "opening date did not parse, substituting the current date"
            );
        }

        let mut supplier = mapped.supplier;
        supplier.cnpj = cnpj.to_string();
        Ok(supplier)
    }

    /// Resolve a postal code and return a copy of the supplier with the
    /// fetched address applied. The input supplier is untouched on failure;
    /// the caller persists the returned copy.
    pub async fn update_address(&self, supplier: &Supplier, cep: &str) -> CatalogResult<Supplier> {
        let record = self.postal.lookup(cep).await?;
        if record.not_found {
            return Err(CatalogError::not_found(format!("postal code {cep}")));
        }

        Ok(apply_postal_address(supplier, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_record() -> RegistrationRecord {
        RegistrationRecord {
            legal_name: Some("ACME COMERCIO DE ALIMENTOS LTDA".to_string()),
            trade_name: Some("ACME MERCADO".to_string()),
            registration_status: Some("ATIVA".to_string()),
            opening_date: Some("15/03/2010".to_string()),
            street: Some("RUA DAS LARANJEIRAS".to_string()),
            number: Some("1020".to_string()),
            district: Some("CENTRO".to_string()),
            city: Some("SAO PAULO".to_string()),
            state: Some("SP".to_string()),
            postal_code: Some("01.310-100".to_string()),
            phone: Some("(11) 4002-8922".to_string()),
            email: Some("contato@acme.com.br".to_string()),
            entity_type: Some("MATRIZ".to_string()),
            cnpj: Some("12.345.678/0001-99".to_string()),
            status: Some("OK".to_string()),
            ..RegistrationRecord::default()
        }
    }

    fn sample_supplier() -> Supplier {
        let mut supplier =
            Supplier::new("12345678000199".to_string(), "Acme Ltda".to_string());
        supplier.street = Some("Rua Antiga".to_string());
        supplier.district = Some("Bairro Antigo".to_string());
        supplier.city = Some("Campinas".to_string());
        supplier.state = Some("SP".to_string());
        supplier.postal_code = Some("13000-000".to_string());
        supplier.phone = Some("(19) 5555-0000".to_string());
        supplier.email = Some("contato@acme.com.br".to_string());
        supplier
    }

    /// A service whose clients point at an unroutable address: any attempted
    /// network call comes back as an external-lookup failure, so validation
    /// errors prove no call was made.
    fn offline_service() -> EnrichmentService {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();
        EnrichmentService::new(
            RegistryClient::new(client.clone(), "http://127.0.0.1:9"),
            PostalClient::new(client, "http://127.0.0.1:9"),
        )
    }

    #[test]
    fn test_map_registration_parses_opening_date() {
        let mapped = map_registration(&sample_record());

        assert!(!mapped.opening_date_fallback);
        assert_eq!(
            mapped.supplier.opening_date,
            NaiveDate::from_ymd_opt(2010, 3, 15)
        );
        assert_eq!(mapped.supplier.legal_name, "ACME COMERCIO DE ALIMENTOS LTDA");
        assert_eq!(mapped.supplier.trade_name.as_deref(), Some("ACME MERCADO"));
        // The lookup key is assigned by the orchestrator, not the mapper.
        assert!(mapped.supplier.cnpj.is_empty());
    }

    #[test]
    fn test_map_registration_falls_back_on_bad_date() {
        let mut record = sample_record();
        record.opening_date = Some("not-a-date".to_string());

        let mapped = map_registration(&record);

        assert!(mapped.opening_date_fallback);
        assert_eq!(
            mapped.supplier.opening_date,
            Some(Utc::now().date_naive())
        );
    }

    #[test]
    fn test_map_registration_falls_back_on_missing_date() {
        let mut record = sample_record();
        record.opening_date = None;

        let mapped = map_registration(&record);

        assert!(mapped.opening_date_fallback);
        assert!(mapped.supplier.opening_date.is_some());
    }

    #[test]
    fn test_apply_postal_address_overwrites_only_address_fields() {
        let supplier = sample_supplier();
        let record = PostalRecord {
            street: Some("Avenida Paulista".to_string()),
            district: Some("Bela Vista".to_string()),
            city: Some("São Paulo".to_string()),
            state: Some("SP".to_string()),
            postal_code: Some("01310-100".to_string()),
            ..PostalRecord::default()
        };

        let updated = apply_postal_address(&supplier, record);

        assert_eq!(updated.street.as_deref(), Some("Avenida Paulista"));
        assert_eq!(updated.district.as_deref(), Some("Bela Vista"));
        assert_eq!(updated.city.as_deref(), Some("São Paulo"));
        assert_eq!(updated.postal_code.as_deref(), Some("01310-100"));
        // Everything else stays as it was.
        assert_eq!(updated.legal_name, supplier.legal_name);
        assert_eq!(updated.cnpj, supplier.cnpj);
        assert_eq!(updated.phone, supplier.phone);
        assert_eq!(updated.email, supplier.email);
        assert_eq!(updated.opening_date, supplier.opening_date);
    }

    #[tokio::test]
    async fn test_empty_cnpj_fails_before_any_lookup() {
        let service = offline_service();

        let err = service.supplier_from_registry("").await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_short_cnpj_fails_before_any_lookup() {
        let service = offline_service();

        let err = service
            .supplier_from_registry("1234567800019")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCnpj { .. }));
    }

    #[tokio::test]
    async fn test_formatted_cnpj_rejected_by_registry_entry_point() {
        let service = offline_service();

        let err = service
            .supplier_from_registry("12.345.678/0001-99")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCnpj { .. }));
    }

    #[tokio::test]
    async fn test_registry_transport_failure_propagates() {
        let service = offline_service();

        let err = service
            .supplier_from_registry("12345678000199")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ExternalLookup { .. }));
    }

    #[tokio::test]
    async fn test_postal_transport_failure_leaves_supplier_unmodified() {
        let service = offline_service();
        let supplier = sample_supplier();
        let before = supplier.clone();

        let err = service.update_address(&supplier, "01310100").await.unwrap_err();

        assert!(matches!(err, CatalogError::ExternalLookup { .. }));
        assert_eq!(supplier, before);
    }
}
