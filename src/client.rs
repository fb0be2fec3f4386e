use crate::core::auth::FUNCTION_KEY_HEADER;
use crate::domain::model::{ValidationRequest, ValidationResponse, STATUS_BAD_REQUEST, STATUS_OK};
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_function_key, validate_url};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 遠端端點的回應：狀態碼與解碼後的信封
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteVerdict {
    pub status: u16,
    pub response: ValidationResponse,
}

impl RemoteVerdict {
    pub fn is_valid(&self) -> bool {
        self.status == STATUS_OK && self.response.success
    }
}

/// 呼叫已部署的 CPF 驗證端點
#[derive(Debug, Clone)]
pub struct CpfClient {
    http: reqwest::Client,
    endpoint: String,
    function_key: Option<String>,
}

impl CpfClient {
    pub fn new(endpoint: impl Into<String>, function_key: Option<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("endpoint", &endpoint)?;
        validate_function_key("function_key", function_key.as_deref())?;

        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            endpoint,
            function_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `None` 時送出不含 `cpf` 欄位的空物件
    pub async fn validate(&self, cpf: Option<&str>) -> Result<RemoteVerdict> {
        let request = ValidationRequest {
            cpf: cpf.map(str::to_string),
        };

        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(key) = &self.function_key {
            builder = builder.header(FUNCTION_KEY_HEADER, key);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("{} answered {}", self.endpoint, status);

        if status != STATUS_OK && status != STATUS_BAD_REQUEST {
            return Err(CpfError::UnexpectedStatus { status });
        }

        let bytes = response.bytes().await?;
        let response: ValidationResponse = serde_json::from_slice(&bytes)?;

        Ok(RemoteVerdict { status, response })
    }
}
