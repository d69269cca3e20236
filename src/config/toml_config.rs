use crate::utils::error::Result;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFileConfig {
    #[serde(default)]
    pub probe: ProbeSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl ProbeFileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Parses the file content after substituting `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }
}

/// Unset variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_probe_section() {
        let toml_content = r#"
[probe]
endpoint = "https://fn.example.com/api/hello"
timeout_seconds = 15
headers = { "x-request-id" = "abc" }
"#;

        let config = ProbeFileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.probe.endpoint.as_deref(),
            Some("https://fn.example.com/api/hello")
        );
        assert_eq!(config.probe.timeout_seconds, Some(15));
        assert_eq!(
            config.probe.headers.unwrap().get("x-request-id").map(String::as_str),
            Some("abc")
        );
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = ProbeFileConfig::from_toml_str("").unwrap();
        assert!(config.probe.endpoint.is_none());
        assert!(config.probe.headers.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let toml_content = r#"
[probe]
endpont = "https://typo.example.com"
"#;
        assert!(ProbeFileConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FN_PROBE_TEST_TOKEN", "secret-token");

        let toml_content = r#"
[probe]
headers = { authorization = "Bearer ${FN_PROBE_TEST_TOKEN}", other = "${FN_PROBE_UNSET_VAR}" }
"#;

        let config = ProbeFileConfig::from_toml_str(toml_content).unwrap();
        let headers = config.probe.headers.unwrap();
        assert_eq!(headers["authorization"], "Bearer secret-token");
        assert_eq!(headers["other"], "${FN_PROBE_UNSET_VAR}");

        std::env::remove_var("FN_PROBE_TEST_TOKEN");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[probe]\nendpoint = \"http://localhost:9000/fn\"\n")
            .unwrap();

        let config = ProbeFileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.probe.endpoint.as_deref(),
            Some("http://localhost:9000/fn")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ProbeFileConfig::from_file("/nonexistent/fn-probe.toml").unwrap_err();
        assert!(matches!(err, crate::utils::error::ProbeError::IoError(_)));
    }
}
