use crate::domain::cpf::{self, Verdict};
use crate::domain::model::{
    HandlerOutcome, ValidationRequest, ValidationResponse, STATUS_BAD_REQUEST, STATUS_OK,
};

/// 處理一個驗證請求的原始 body
///
/// 不會失敗：JSON 解析錯誤、`null`、非物件、缺少 `cpf` 或 `cpf` 既非字串也非數字，
/// 都回傳「缺少 CPF」的 400 回應。
pub fn handle_request(body: &[u8]) -> HandlerOutcome {
    tracing::info!("🔍 Starting CPF validation");

    let cpf = match parse_request(body).and_then(|request| request.cpf) {
        Some(cpf) if !cpf.is_empty() => cpf,
        _ => {
            tracing::warn!("⚠️ Invalid request: body or CPF missing");
            return HandlerOutcome {
                status: STATUS_BAD_REQUEST,
                body: ValidationResponse::missing(),
            };
        }
    };

    tracing::debug!(cpf = %cpf, "CPF received");

    match cpf::verify(Some(&cpf)) {
        Verdict::Valid => {
            tracing::info!("✅ CPF valid");
            HandlerOutcome {
                status: STATUS_OK,
                body: ValidationResponse::valid(cpf),
            }
        }
        verdict => {
            tracing::info!(?verdict, "❌ CPF invalid");
            HandlerOutcome {
                status: STATUS_BAD_REQUEST,
                body: ValidationResponse::invalid(cpf),
            }
        }
    }
}

/// 只接受 JSON 物件；其他形狀（含陣列）視為格式錯誤
fn parse_request(body: &[u8]) -> Option<ValidationRequest> {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Request body is not valid JSON: {}", e);
            return None;
        }
    };

    if !value.is_object() {
        return None;
    }

    match serde_json::from_value(value) {
        Ok(request) => Some(request),
        Err(e) => {
            tracing::debug!("Request body has an unexpected shape: {}", e);
            None
        }
    }
}
