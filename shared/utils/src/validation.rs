use crate::error::{CatalogError, CatalogResult};
use regex::Regex;
use validator::{Validate, ValidationErrors};

/// Bare CNPJ form: exactly 14 decimal digits, no punctuation.
///
/// This is the shape expected by the registry lookup endpoint and the
/// canonical form stored on suppliers created through enrichment.
pub fn is_bare_cnpj(cnpj: &str) -> bool {
    cnpj.len() == 14 && cnpj.bytes().all(|b| b.is_ascii_digit())
}

/// Formatted CNPJ form: 18 characters matching `##.###.###/####-##`.
///
/// This is the shape expected on full supplier payloads submitted by hand.
pub fn is_formatted_cnpj(cnpj: &str) -> bool {
    let cnpj_regex = Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").unwrap();
    cnpj.len() == 18 && cnpj_regex.is_match(cnpj)
}

pub fn validate_model<T: Validate>(model: &T) -> CatalogResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(CatalogError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match error.message.as_deref() {
                Some(custom) => custom.to_string(),
                None => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}
