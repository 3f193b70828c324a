//! Tax-registry client.
//!
//! Fetches business-registration data for a CNPJ from a ReceitaWS-compatible
//! API. One call per lookup, no retries; callers wanting retries layer them
//! on top.

use comercio_utils::{CatalogError, CatalogResult};
use reqwest::Client;
use serde::Deserialize;

pub const REGISTRY_SERVICE: &str = "tax registry";

#[derive(Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Look up the registration record for a bare 14-digit CNPJ.
    ///
    /// Transport errors, non-success statuses and unparsable bodies all
    /// surface as an external-lookup failure carrying the cause. The registry
    /// signals unknown identifiers with an HTTP 200 `status: "ERROR"` payload
    /// rather than a transport error; that payload parses and is returned
    /// as-is for the caller to judge.
    pub async fn lookup(&self, cnpj: &str) -> CatalogResult<RegistrationRecord> {
        let url = format!("{}/v1/cnpj/{}", self.base_url, cnpj);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::external_lookup(REGISTRY_SERVICE, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::external_lookup(
                REGISTRY_SERVICE,
                format!("unexpected status {status}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::external_lookup(REGISTRY_SERVICE, e.to_string()))
    }
}

/// Raw registration record, in the registry's wire shape.
///
/// Every field is optional at the wire level; a fresh record is produced per
/// call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationRecord {
    #[serde(rename = "nome")]
    pub legal_name: Option<String>,
    #[serde(rename = "fantasia")]
    pub trade_name: Option<String>,
    #[serde(rename = "situacao")]
    pub registration_status: Option<String>,
    /// Opening date as the registry formats it: `dd/mm/yyyy`.
    #[serde(rename = "abertura")]
    pub opening_date: Option<String>,
    #[serde(rename = "logradouro")]
    pub street: Option<String>,
    #[serde(rename = "numero")]
    pub number: Option<String>,
    #[serde(rename = "complemento")]
    pub complement: Option<String>,
    #[serde(rename = "bairro")]
    pub district: Option<String>,
    #[serde(rename = "municipio")]
    pub city: Option<String>,
    #[serde(rename = "uf")]
    pub state: Option<String>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    #[serde(rename = "tipo")]
    pub entity_type: Option<String>,
    /// "OK" or "ERROR".
    pub status: Option<String>,
    pub message: Option<String>,
}

impl RegistrationRecord {
    /// True when the registry answered with its structured not-found payload.
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("ERROR")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_registration_payload() {
        let body = r#"{
            "abertura": "15/03/2010",
            "situacao": "ATIVA",
            "tipo": "MATRIZ",
            "nome": "ACME COMERCIO DE ALIMENTOS LTDA",
            "fantasia": "ACME MERCADO",
            "logradouro": "RUA DAS LARANJEIRAS",
            "numero": "1020",
            "complemento": "SALA 3",
            "municipio": "SAO PAULO",
            "bairro": "CENTRO",
            "uf": "SP",
            "cep": "01.310-100",
            "email": "contato@acme.com.br",
            "telefone": "(11) 4002-8922",
            "status": "OK",
            "cnpj": "12.345.678/0001-99"
        }"#;

        let record: RegistrationRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.legal_name.as_deref(), Some("ACME COMERCIO DE ALIMENTOS LTDA"));
        assert_eq!(record.trade_name.as_deref(), Some("ACME MERCADO"));
        assert_eq!(record.opening_date.as_deref(), Some("15/03/2010"));
        assert_eq!(record.state.as_deref(), Some("SP"));
        assert!(!record.is_error());
    }

    #[test]
    fn test_parses_structured_not_found_payload() {
        let body = r#"{"status": "ERROR", "message": "CNPJ inválido"}"#;

        let record: RegistrationRecord = serde_json::from_str(body).unwrap();
        assert!(record.is_error());
        assert!(record.legal_name.is_none());
    }
}
