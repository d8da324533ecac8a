//! Build-time Configuration
//!
//! The bundle runs in a browser, so settings are baked in from the
//! environment at compile time.

use log::LevelFilter;

use crate::i18n::Language;

pub const DEFAULT_API_URL: &str = "https://model-backend-nxni.onrender.com/get-breed";
pub const DEFAULT_LANGUAGE_HEADER: &str = "Accept-Language";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Breed list endpoint
    pub api_url: &'static str,
    /// Header carrying the language code; empty disables it
    pub language_header: &'static str,
    /// 0 = wait forever
    pub request_timeout_ms: u32,
    pub log_level: LevelFilter,
    /// Used when the browser language is not one we support
    pub default_language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL,
            language_header: DEFAULT_LANGUAGE_HEADER,
            request_timeout_ms: 0,
            log_level: LevelFilter::Info,
            default_language: Language::English,
        }
    }
}

impl AppConfig {
    /// Read `BREED_*` variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BREED_API_URL"),
            option_env!("BREED_LANGUAGE_HEADER"),
            option_env!("BREED_REQUEST_TIMEOUT_MS"),
            option_env!("BREED_LOG_LEVEL"),
            option_env!("BREED_DEFAULT_LANGUAGE"),
        )
    }

    fn from_values(
        api_url: Option<&'static str>,
        language_header: Option<&'static str>,
        timeout_ms: Option<&str>,
        log_level: Option<&str>,
        default_language: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            language_header: language_header
                .map(str::trim)
                .unwrap_or(defaults.language_header),
            request_timeout_ms: timeout_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            default_language: default_language
                .and_then(Language::from_code)
                .unwrap_or(defaults.default_language),
        }
    }

    /// Header to attach for `language`, if enabled
    pub fn language_header_for(&self, language: Language) -> Option<(&'static str, &'static str)> {
        if self.language_header.is_empty() {
            None
        } else {
            Some((self.language_header, language.code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_ms, 0);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("http://localhost:8080/get-breed"),
            Some("X-Lang"),
            Some("5000"),
            Some("debug"),
            Some("or"),
        );
        assert_eq!(config.api_url, "http://localhost:8080/get-breed");
        assert_eq!(config.language_header, "X-Lang");
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.default_language, Language::Odia);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), None, Some("soon"), Some("loud"), Some("fr"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_empty_header_disables_language_header() {
        let config = AppConfig::from_values(None, Some(""), None, None, None);
        assert_eq!(config.language_header_for(Language::Hindi), None);

        let config = AppConfig::default();
        assert_eq!(
            config.language_header_for(Language::Hindi),
            Some(("Accept-Language", "hi"))
        );
    }
}
