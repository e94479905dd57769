use std::{fs, path::Path};

use serde::Deserialize;

use crate::{CheckflowError, Result};

pub const DEFAULT_GENERATOR_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GENERATOR_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// generative collaborator config
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// base url of the generative language api
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// model name, e.g. gemini-2.5-flash
    #[serde(default = "default_model")]
    pub model: String,
    /// environment variable holding the api key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// request timeout in milliseconds, no timeout when absent
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_GENERATOR_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_GENERATOR_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())
            .map_err(|e| CheckflowError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), e)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use crate::{CheckflowError, Config};

    #[test]
    fn test_config_deserialize() {
        let toml_str = r#"
        [generator]
        endpoint = "http://localhost:8080/v1beta"
        model = "gemini-test"
        api_key_env = "CHECKFLOW_KEY"
        timeout = 5000
        "#;
        let config = Config::load_from_str(toml_str).unwrap();
        assert_eq!(config.generator.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(config.generator.model, "gemini-test");
        assert_eq!(config.generator.api_key_env, "CHECKFLOW_KEY");
        assert_eq!(config.generator.timeout, Some(5000));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert_eq!(config.generator.api_key_env, "API_KEY");
        assert!(config.generator.timeout.is_none());

        let partial = Config::load_from_str("[generator]\nmodel = \"other\"").unwrap();
        assert_eq!(partial.generator.model, "other");
        assert_eq!(partial.generator.endpoint, "https://generativelanguage.googleapis.com/v1beta");
    }

    #[test]
    fn test_config_invalid() {
        let err = Config::load_from_str("[generator]\ntimeout = \"soon\"").unwrap_err();
        assert!(matches!(err, CheckflowError::Config(_)));
    }
}
