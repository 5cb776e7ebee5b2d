//! Runtime configuration for the API endpoint and the local key-value store.
//! Values come from CLI flags or their environment variables; blank values fall
//! back to the defaults. The API key is the only sensitive value and is kept in a
//! `SecretString` so it never shows up in `Debug` output.

use crate::api::AppError;
use secrecy::SecretString;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";
pub const DEFAULT_STORAGE_PATH: &str = ".userdesk/storage.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: Option<SecretString>,
    pub storage_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl AppConfig {
    /// Builds a config from optional raw values.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is not an absolute http(s) URL.
    pub fn new(
        base_url: Option<&str>,
        api_key: Option<&str>,
        storage_path: Option<&str>,
    ) -> Result<Self, AppError> {
        let base_url = match base_url.and_then(normalize_value) {
            Some(value) => validate_base_url(&value)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            base_url,
            api_key: api_key.and_then(normalize_value).map(SecretString::from),
            storage_path: storage_path
                .and_then(normalize_value)
                .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from),
        })
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_base_url(value: &str) -> Result<String, AppError> {
    let url = Url::parse(value)
        .map_err(|err| AppError::Config(format!("Invalid base URL {value}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::Config(format!(
                "Unsupported base URL scheme: {scheme}"
            )))
        }
    }

    if url.host_str().is_none() {
        return Err(AppError::Config(format!("Base URL has no host: {value}")));
    }

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://reqres.in/api "),
            Some("https://reqres.in/api".to_string())
        );
    }

    #[test]
    fn new_falls_back_to_defaults() -> Result<(), AppError> {
        let config = AppConfig::new(None, Some("  "), Some(""))?;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
        Ok(())
    }

    #[test]
    fn new_keeps_overrides() -> Result<(), AppError> {
        let config = AppConfig::new(
            Some("http://localhost:3000/api/"),
            Some("reqres-free-v1"),
            Some("/tmp/userdesk.json"),
        )?;
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(
            config.api_key.as_ref().map(|key| key.expose_secret().to_string()),
            Some("reqres-free-v1".to_string())
        );
        assert_eq!(config.storage_path, PathBuf::from("/tmp/userdesk.json"));
        Ok(())
    }

    #[test]
    fn new_rejects_bad_base_urls() {
        assert!(matches!(
            AppConfig::new(Some("reqres.in/api"), None, None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::new(Some("ftp://reqres.in/api"), None, None),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn debug_output_redacts_api_key() -> Result<(), AppError> {
        let config = AppConfig::new(None, Some("super-secret-key"), None)?;
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
        Ok(())
    }
}
