//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub advisory: AdvisoryConfig,

    /// Audit log destination; `None` disables file auditing.
    #[serde(default)]
    pub audit_log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5050
}
fn default_path() -> String {
    "/v1/chat/completions".to_string()
}
fn default_model() -> String {
    "llama-3-8b-instruct".to_string()
}
fn default_temperature() -> f32 {
    0.2
}
fn default_max_tokens() -> u32 {
    900
}
fn default_timeout_seconds() -> u64 {
    60
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            advisory: AdvisoryConfig::default(),
            audit_log_path: None,
        }
    }
}

impl AdvisoryConfig {
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl EngineConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Environment-driven configuration, matching the deployment contract:
    /// LLM_HOST, LLM_PORT, LLM_PATH, LLM_MODEL, LLM_API_KEY,
    /// LLM_TIMEOUT_SECONDS, AUDIT_LOG.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("LLM_HOST") {
            config.advisory.host = host;
        }
        if let Ok(port) = std::env::var("LLM_PORT") {
            if let Ok(port) = port.parse() {
                config.advisory.port = port;
            }
        }
        if let Ok(path) = std::env::var("LLM_PATH") {
            config.advisory.path = path;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.advisory.model = model;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            if !key.is_empty() {
                config.advisory.api_key = Some(key);
            }
        }
        if let Ok(timeout) = std::env::var("LLM_TIMEOUT_SECONDS") {
            if let Ok(timeout) = timeout.parse() {
                config.advisory.timeout_seconds = timeout;
            }
        }
        if let Ok(path) = std::env::var("AUDIT_LOG") {
            if !path.is_empty() {
                config.audit_log_path = Some(PathBuf::from(path));
            }
        }

        config
    }
}
