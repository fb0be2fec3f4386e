use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Endpoint returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Server error: {message}")]
    ServerError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CpfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CpfError::ApiError(_) | CpfError::UnexpectedStatus { .. } => ErrorCategory::Network,
            CpfError::IoError(_) | CpfError::ServerError { .. } => ErrorCategory::Io,
            CpfError::SerializationError(_) => ErrorCategory::Data,
            CpfError::ConfigError { .. }
            | CpfError::ConfigValidationError { .. }
            | CpfError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CpfError::ApiError(_) => "Check that the endpoint is reachable and retry".to_string(),
            CpfError::UnexpectedStatus { status: 401 } => {
                "Provide the function key with --function-key".to_string()
            }
            CpfError::UnexpectedStatus { .. } => {
                "Check that the URL points to the CPF validation route".to_string()
            }
            CpfError::IoError(_) => "Check file paths and permissions".to_string(),
            CpfError::SerializationError(_) => {
                "The endpoint did not answer with the expected JSON envelope".to_string()
            }
            CpfError::ServerError { .. } => {
                "Check that the address is free and the port is allowed".to_string()
            }
            CpfError::ConfigError { .. } | CpfError::ConfigValidationError { .. } => {
                "Review the configuration file".to_string()
            }
            CpfError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not talk to the CPF endpoint: {}", self),
            ErrorCategory::Io => format!("System error: {}", self),
            ErrorCategory::Data => format!("Unexpected response: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
