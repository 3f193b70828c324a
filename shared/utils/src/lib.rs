pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.external.timeout_seconds, 5);
        assert!(config.external.registry_url.starts_with("https://"));
    }

    #[test]
    fn test_error_handling() {
        let error = CatalogError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);
    }
}
