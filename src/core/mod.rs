pub mod auth;
pub mod handler;

pub use crate::domain::model::{HandlerOutcome, ValidationRequest, ValidationResponse};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
