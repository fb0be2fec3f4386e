use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_ROUTE};
use crate::core::ConfigProvider;
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub auth: Option<AuthConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_route")]
    pub route: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub function_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_route() -> String {
    DEFAULT_ROUTE.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CpfError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CpfError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CPF_FUNCTION_KEY})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CpfError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|logging| logging.format)
            .unwrap_or_default()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }

    fn route(&self) -> &str {
        &self.server.route
    }

    fn function_key(&self) -> Option<&str> {
        self.auth.as_ref().and_then(|auth| auth.function_key.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        // 驗證監聽位址
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        // 驗證路由
        validate_route("server.route", &self.server.route)?;

        // 驗證 function key，未替換的 ${VAR} 代表環境變數沒有設定
        let function_key = self.function_key();
        validate_function_key("auth.function_key", function_key)?;
        if let Some(key) = function_key {
            if key.contains("${") {
                return Err(CpfError::ConfigValidationError {
                    field: "auth.function_key".to_string(),
                    message: format!("Unresolved environment variable in '{}'", key),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[server]\n").unwrap();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 7071);
        assert_eq!(config.route(), "/api/HttpValidaCpf");
        assert!(config.function_key().is_none());
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
host = "0.0.0.0"
port = 8080
route = "/cpf"

[auth]
function_key = "abc123"

[logging]
format = "json"
verbose = true
"#,
        )
        .unwrap();

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.route(), "/cpf");
        assert_eq!(config.function_key(), Some("abc123"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VALIDA_CPF_TEST_KEY", "from-env");
        let config = TomlConfig::from_toml_str(
            "[server]\n[auth]\nfunction_key = \"${VALIDA_CPF_TEST_KEY}\"\n",
        )
        .unwrap();
        assert_eq!(config.function_key(), Some("from-env"));
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let config = TomlConfig::from_toml_str(
            "[server]\n[auth]\nfunction_key = \"${VALIDA_CPF_UNSET_VARIABLE}\"\n",
        )
        .unwrap();
        assert_eq!(config.function_key(), Some("${VALIDA_CPF_UNSET_VARIABLE}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values() {
        let config = TomlConfig::from_toml_str("[server]\nport = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[server]\nroute = \"cpf\"\n").unwrap();
        assert!(config.validate().is_err());

        assert!(TomlConfig::from_toml_str("[server]\nport = 70000\n").is_err());
        assert!(TomlConfig::from_toml_str("[logging]\nformat = \"json\"\n").is_err());
    }
}
