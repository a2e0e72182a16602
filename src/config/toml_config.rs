use crate::config::{DEFAULT_CREDENTIALS_PATH, DEFAULT_DESTINATION_ENDPOINT, DEFAULT_SOURCE_ENDPOINT};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TransferError};
use crate::utils::validation::{validate_path, validate_timeout, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub destination: DestinationConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_endpoint")]
    pub endpoint: String,
}

/// 同時套用在來源 GET 與目的端 POST 的 HTTP 設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    #[serde(default = "default_destination_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default = "default_credentials_path")]
    pub path: String,
}

fn default_source_endpoint() -> String {
    DEFAULT_SOURCE_ENDPOINT.to_string()
}

fn default_destination_endpoint() -> String {
    DEFAULT_DESTINATION_ENDPOINT.to_string()
}

fn default_credentials_path() -> String {
    DEFAULT_CREDENTIALS_PATH.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_source_endpoint(),
        }
    }
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_destination_endpoint(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: default_credentials_path(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TransferError::StartupConfig {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TransferError::StartupConfig {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HCP_CREDENTIALS})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TransferError::StartupConfig {
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
    fn source_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn destination_endpoint(&self) -> &str {
        &self.destination.endpoint
    }

    fn credentials_path(&self) -> &str {
        &self.credentials.path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.http.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_url("destination.endpoint", &self.destination.endpoint)?;
        validate_path("credentials.path", &self.credentials.path)?;
        validate_timeout("http.timeout_seconds", self.http.timeout_seconds)?;
        Ok(())
    }
}
