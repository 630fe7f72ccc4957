// src/config.rs
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_RESUME_PATH: &str = "assets/resume.pdf";
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Runtime configuration, read once at startup and handed to whatever needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Empty when unset; calls are still attempted and fail upstream.
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub bind_addr: SocketAddr,
    pub resume_path: PathBuf,
    pub session_ttl_minutes: i64,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3000))),
            resume_path: PathBuf::from(DEFAULT_RESUME_PATH),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load from the process environment (call `dotenvy::dotenv()` first to pick up `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup so tests never touch the real environment.
    /// A malformed listen address is an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("VITE_GEMINI_API_KEY"))
            .unwrap_or_default();

        let gemini_base_url = lookup("GEMINI_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.gemini_base_url);

        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.gemini_model);

        let bind_addr = match (lookup("BIND_ADDR"), lookup("PORT")) {
            (Some(raw), _) => raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidBindAddr {
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            (None, Some(port)) => port
                .parse::<u16>()
                .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            (None, None) => defaults.bind_addr,
        };

        let resume_path = lookup("RESUME_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.resume_path);

        let session_ttl_minutes = lookup("SESSION_TTL_MINUTES")
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.session_ttl_minutes);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            bind_addr,
            resume_path,
            session_ttl_minutes,
            log_format,
        })
    }

    pub fn gemini_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.gemini_api_key, "");
        assert!(!config.gemini_configured());
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.session_ttl_minutes, DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_vite_key_is_accepted_as_fallback() {
        let config = AppConfig::from_lookup(lookup_from(&[("VITE_GEMINI_API_KEY", "vite-key")])).unwrap();
        assert_eq!(config.gemini_api_key, "vite-key");

        let config = AppConfig::from_lookup(lookup_from(&[
            ("VITE_GEMINI_API_KEY", "vite-key"),
            ("GEMINI_API_KEY", "primary"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key, "primary");
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_BASE_URL", "http://127.0.0.1:9999/v1beta/"),
            ("PORT", "8080"),
            ("SESSION_TTL_MINUTES", "-5"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_base_url, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.session_ttl_minutes, DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(config.log_format, LogFormat::Json);

        let config = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "127.0.0.1:4000"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 4000)));
    }

    #[test]
    fn test_malformed_listen_address_is_reported() {
        let err = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "not-an-addr"));
        assert!(err.to_string().starts_with("Invalid BIND_ADDR 'not-an-addr'"));

        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }
}
