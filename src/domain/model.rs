use serde::{Deserialize, Deserializer, Serialize};

pub const MESSAGE_VALID: &str = "CPF válido";
pub const MESSAGE_INVALID: &str = "CPF inválido";
pub const MESSAGE_MISSING: &str = "Por favor, forneça um CPF no corpo da requisição.";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// 請求內容，其他欄位一律忽略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cpf: Option<String>,
}

/// `cpf` 可為字串或 JSON 數字；數字以十進位文字表示（前導零自然遺失）
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCpf {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawCpf>::deserialize(deserializer)?.map(|raw| match raw {
        RawCpf::Text(text) => text,
        RawCpf::Number(number) => number.to_string(),
    }))
}

/// 回應信封，欄位順序固定為 success、message、cpf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub success: bool,
    pub message: String,
    pub cpf: Option<String>,
}

impl ValidationResponse {
    pub fn valid(cpf: impl Into<String>) -> Self {
        Self {
            success: true,
            message: MESSAGE_VALID.to_string(),
            cpf: Some(cpf.into()),
        }
    }

    pub fn invalid(cpf: impl Into<String>) -> Self {
        Self {
            success: false,
            message: MESSAGE_INVALID.to_string(),
            cpf: Some(cpf.into()),
        }
    }

    pub fn missing() -> Self {
        Self {
            success: false,
            message: MESSAGE_MISSING.to_string(),
            cpf: None,
        }
    }
}

/// 處理結果：HTTP 狀態碼與回應信封
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub status: u16,
    pub body: ValidationResponse,
}
