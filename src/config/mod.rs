#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, ProbeRequest};
use crate::utils::error::Result;
use crate::utils::validation::{validate_headers, validate_range, validate_url, Validate};
use std::collections::HashMap;
use std::time::Duration;
use toml_config::ProbeFileConfig;

/// Deployed function the probe targets when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://fn-probe-demo.netlify.app/.netlify/functions/hello";

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: HashMap<String, String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }
}

impl ProbeSettings {
    /// CLI values win over the file, the file wins over defaults.
    pub fn resolve(
        endpoint: Option<String>,
        timeout_seconds: Option<u64>,
        file: Option<ProbeFileConfig>,
    ) -> Self {
        let section = file.map(|f| f.probe).unwrap_or_default();

        Self {
            endpoint: endpoint
                .or(section.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout_seconds: timeout_seconds.or(section.timeout_seconds),
            headers: section.headers.unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> ProbeRequest {
        ProbeRequest::from_config(self)
    }
}

impl ConfigProvider for ProbeSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ProbeSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        validate_headers("headers", &self.headers)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::ProbeSection;

    fn file_with(endpoint: &str, timeout: u64) -> ProbeFileConfig {
        let mut headers = HashMap::new();
        headers.insert("x-source".to_string(), "file".to_string());
        ProbeFileConfig {
            probe: ProbeSection {
                endpoint: Some(endpoint.to_string()),
                timeout_seconds: Some(timeout),
                headers: Some(headers),
            },
        }
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        let settings = ProbeSettings::resolve(None, None, None);
        assert_eq!(settings, ProbeSettings::default());
        assert!(settings.validate().is_ok());

        let request = settings.to_request();
        assert_eq!(request.url, DEFAULT_ENDPOINT);
        assert!(request.headers.is_empty());
        assert_eq!(request.timeout, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings =
            ProbeSettings::resolve(None, None, Some(file_with("http://localhost:9000/fn", 5)));
        assert_eq!(settings.endpoint, "http://localhost:9000/fn");
        assert_eq!(settings.timeout_seconds, Some(5));
        assert_eq!(settings.headers["x-source"], "file");
    }

    #[test]
    fn test_cli_overrides_file() {
        let settings = ProbeSettings::resolve(
            Some("http://localhost:7000/other".to_string()),
            Some(20),
            Some(file_with("http://localhost:9000/fn", 5)),
        );
        assert_eq!(settings.endpoint, "http://localhost:7000/other");
        assert_eq!(settings.timeout_seconds, Some(20));
        assert_eq!(settings.to_request().timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = ProbeSettings::default();
        settings.endpoint = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = ProbeSettings::default();
        settings.timeout_seconds = Some(0);
        assert!(settings.validate().is_err());

        let mut settings = ProbeSettings::default();
        settings
            .headers
            .insert("bad header".to_string(), "x".to_string());
        assert!(settings.validate().is_err());
    }
}
