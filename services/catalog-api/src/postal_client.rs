//! Postal-code client.
//!
//! Resolves a CEP to street-level address data against a ViaCEP-compatible
//! API. Same failure model as the registry client: one call, no retries,
//! every failure wrapped with its cause.

use comercio_utils::{CatalogError, CatalogResult};
use reqwest::Client;
use serde::Deserialize;

pub const POSTAL_SERVICE: &str = "postal lookup";

#[derive(Clone)]
pub struct PostalClient {
    client: Client,
    base_url: String,
}

impl PostalClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Look up the address record for a postal code.
    ///
    /// The code is not pre-validated; malformed codes come back as an error
    /// status from the remote service. A well-formed unknown code answers
    /// HTTP 200 with an `erro` flag, which parses and is returned as-is.
    pub async fn lookup(&self, cep: &str) -> CatalogResult<PostalRecord> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::external_lookup(POSTAL_SERVICE, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::external_lookup(
                POSTAL_SERVICE,
                format!("unexpected status {status}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::external_lookup(POSTAL_SERVICE, e.to_string()))
    }
}

/// Raw postal record, in the postal service's wire shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostalRecord {
    #[serde(rename = "logradouro")]
    pub street: Option<String>,
    #[serde(rename = "complemento")]
    pub complement: Option<String>,
    #[serde(rename = "bairro")]
    pub district: Option<String>,
    #[serde(rename = "localidade")]
    pub city: Option<String>,
    #[serde(rename = "uf")]
    pub state: Option<String>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
    /// Set on the structured answer for a well-formed but unknown code.
    #[serde(rename = "erro", default)]
    pub not_found: bool,
}
