#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_BASE;
use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_LIMIT: usize = 3;
pub const MAX_LIMIT: usize = 500;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Effective settings after defaults, config file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub limit: usize,
    pub timeout_seconds: Option<u64>,
    pub jsonp_callback: Option<String>,
    pub clock_time: bool,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_seconds: None,
            jsonp_callback: None,
            clock_time: false,
            output_format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Layers a config file over the defaults.
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(base_url) = &config.api.base_url {
            settings.api_base_url = base_url.clone();
        }
        if let Some(limit) = config.api.limit {
            settings.limit = limit;
        }
        settings.timeout_seconds = config.api.timeout_seconds;
        settings.jsonp_callback = config.api.callback.clone();
        if let Some(clock_time) = config.display.clock_time {
            settings.clock_time = clock_time;
        }
        if let Some(format) = &config.display.format {
            settings.output_format = format.parse()?;
        }

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn jsonp_callback(&self) -> Option<&str> {
        self.jsonp_callback.as_deref()
    }

    fn clock_time(&self) -> bool {
        self.clock_time
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url_without_query("api.base_url", &self.api_base_url)?;
        validation::validate_range("api.limit", self.limit, 1, MAX_LIMIT)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("api.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        if let Some(callback) = &self.jsonp_callback {
            validation::validate_non_empty_string("api.callback", callback)?;
            validation::validate_identifier("api.callback", callback)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.limit(), 3);
        assert_eq!(settings.api_base_url(), "http://api.playwhesmarter.com");
        assert!(!settings.clock_time());
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "https://example.com/api"
limit = 12
callback = "JSON_CALLBACK"

[display]
clock_time = true
format = "json"
"#,
        )
        .unwrap();

        let settings = Settings::from_toml(&config).unwrap();
        assert_eq!(settings.api_base_url, "https://example.com/api");
        assert_eq!(settings.limit, 12);
        assert_eq!(settings.jsonp_callback(), Some("JSON_CALLBACK"));
        assert!(settings.clock_time);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bad_format_in_toml() {
        let config = TomlConfig::from_toml_str("[display]\nformat = \"xml\"\n").unwrap();
        assert!(Settings::from_toml(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_limit = Settings {
            limit: 0,
            ..Settings::default()
        };
        assert!(zero_limit.validate().is_err());

        let bad_url = Settings {
            api_base_url: "ftp://example.com".to_string(),
            ..Settings::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_callback = Settings {
            jsonp_callback: Some("cb&limit=1".to_string()),
            ..Settings::default()
        };
        assert!(bad_callback.validate().is_err());

        let base_with_query = Settings {
            api_base_url: "https://example.com/api?key=abc".to_string(),
            ..Settings::default()
        };
        assert!(base_with_query.validate().is_err());

        let bad_timeout = Settings {
            timeout_seconds: Some(0),
            ..Settings::default()
        };
        assert!(bad_timeout.validate().is_err());
    }
}
