use crate::utils::error::Result;
use crate::utils::validation::{validate_function_key, Validate};
use std::env;

#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub function_key: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            function_key: env::var("FUNCTION_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_function_key("FUNCTION_KEY", self.function_key.as_deref())?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
