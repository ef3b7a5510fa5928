use crate::config::{
    DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECONDS, LIMIT_PARAM,
    MAX_TIMEOUT_SECONDS,
};
use crate::core::preview::DEFAULT_PREVIEW_ROWS;
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// File-based settings, an alternative to the command-line flags.
///
/// ```toml
/// [source]
/// endpoint = "https://jsonplaceholder.typicode.com/todos"
/// limit = 20
/// timeout_seconds = 10
///
/// [source.parameters]
/// userId = "1"
///
/// [load]
/// output_path = "todos.csv"
///
/// [preview]
/// rows = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    pub parameters: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_rows")]
    pub rows: usize,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            limit: default_limit(),
            timeout_seconds: default_timeout_seconds(),
            parameters: None,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            rows: default_preview_rows(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_HOST})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(LIMIT_PARAM.to_string(), self.source.limit.to_string())];
        if let Some(extra) = &self.source.parameters {
            params.extend(
                extra
                    .iter()
                    .filter(|(key, _)| key.as_str() != LIMIT_PARAM)
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
        }
        params
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds)
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn preview_count(&self) -> usize {
        self.preview.rows
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_positive_number("source.limit", self.source.limit, 1)?;
        validation::validate_range(
            "source.timeout_seconds",
            self.source.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_query_params("source.parameters", &self.query_params())?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        Ok(())
    }
}
