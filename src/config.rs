use std::env;

use url::Url;

use crate::errors::AppError;
use crate::view::format::DateFormatter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

pub const API_BASE_URL_VAR: &str = "ORDER_API_BASE_URL";
pub const DISPLAY_UTC_VAR: &str = "ORDER_VIEWER_DISPLAY_UTC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub display_utc: bool,
}

impl AppConfig {
    /// Read configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup(API_BASE_URL_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_base_url(&raw)?,
            _ => parse_base_url(DEFAULT_API_BASE_URL)?,
        };
        let display_utc = match lookup(DISPLAY_UTC_VAR) {
            Some(raw) => parse_flag(DISPLAY_UTC_VAR, &raw)?,
            None => false,
        };
        Ok(Self {
            api_base_url,
            display_utc,
        })
    }

    pub fn date_formatter(&self) -> DateFormatter {
        if self.display_utc {
            DateFormatter::utc()
        } else {
            DateFormatter::local()
        }
    }
}

/// Accepts absolute `http` and `https` URLs only.
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::Config(format!("invalid base url '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Config(format!(
            "unsupported scheme '{}' in base url '{}'",
            other, raw
        ))),
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        _ => Err(AppError::Config(format!("{} must be a boolean, got '{}'", name, raw))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).expect("defaults");
        assert_eq!(cfg.api_base_url.as_str(), "http://localhost:8081/");
        assert!(!cfg.display_utc);
    }

    #[test]
    fn reads_base_url_and_utc_flag() {
        let cfg = config(&[
            (API_BASE_URL_VAR, "https://orders.example.com/api/v1"),
            (DISPLAY_UTC_VAR, "TRUE"),
        ])
        .expect("config");
        assert_eq!(cfg.api_base_url.as_str(), "https://orders.example.com/api/v1");
        assert!(cfg.display_utc);
        assert_eq!(cfg.date_formatter(), DateFormatter::utc());
    }

    #[test]
    fn blank_base_url_uses_default() {
        let cfg = config(&[(API_BASE_URL_VAR, "  ")]).expect("config");
        assert_eq!(cfg.api_base_url.as_str(), "http://localhost:8081/");
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(matches!(
            config(&[(API_BASE_URL_VAR, "not a url")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config(&[(API_BASE_URL_VAR, "ftp://orders.example.com")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn rejects_bad_flag() {
        let err = config(&[(DISPLAY_UTC_VAR, "maybe")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: ORDER_VIEWER_DISPLAY_UTC must be a boolean, got 'maybe'"
        );
    }
}
