pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7071;
pub const DEFAULT_ROUTE: &str = "/api/HttpValidaCpf";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "valida-cpf")]
#[command(about = "HTTP endpoint that validates Brazilian CPF numbers")]
pub struct CliConfig {
    #[arg(long, help = "Address to bind [default: 127.0.0.1]")]
    pub host: Option<String>,

    #[arg(long, help = "Port to listen on [default: 7071]")]
    pub port: Option<u16>,

    #[arg(long, help = "Route of the validation endpoint [default: /api/HttpValidaCpf]")]
    pub route: Option<String>,

    #[arg(
        long,
        env = "CPF_FUNCTION_KEY",
        hide_env_values = true,
        help = "Require this key in the x-functions-key header or the code query parameter"
    )]
    pub function_key: Option<String>,

    #[arg(
        long,
        help = "Load server settings from a TOML file; explicit flags take precedence"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 以明確指定的參數（含 `CPF_FUNCTION_KEY`）覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut toml_config::TomlConfig) {
        if let Some(host) = &self.host {
            tracing::debug!("--host overrides server.host");
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            tracing::debug!("--port overrides server.port");
            config.server.port = port;
        }
        if let Some(route) = &self.route {
            tracing::debug!("--route overrides server.route");
            config.server.route = route.clone();
        }
        if let Some(key) = &self.function_key {
            tracing::debug!("--function-key overrides auth.function_key");
            config.auth = Some(toml_config::AuthConfig {
                function_key: Some(key.clone()),
            });
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    fn route(&self) -> &str {
        self.route.as_deref().unwrap_or(DEFAULT_ROUTE)
    }

    fn function_key(&self) -> Option<&str> {
        self.function_key.as_deref()
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        // 驗證監聽位址
        validate_non_empty_string("host", self.host())?;
        validate_range("port", self.port(), 1, u16::MAX)?;

        // 驗證路由
        validate_route("route", self.route())?;

        validate_function_key("function_key", self.function_key())?;

        Ok(())
    }
}
