pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::{router, serve, serve_listener};
pub use crate::client::{CpfClient, RemoteVerdict};
pub use crate::config::lambda::LambdaConfig;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::handler::handle_request;
pub use crate::domain::cpf::{validate, verify, Verdict};
pub use crate::utils::error::{CpfError, Result};
