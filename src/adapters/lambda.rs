//! API Gateway proxy 事件與核心處理器之間的轉換
//!
//! 不依賴 `lambda_runtime`，因此可以在沒有 `lambda` feature 時測試。

use crate::core::auth::{self, FUNCTION_KEY_HEADER, FUNCTION_KEY_QUERY};
use crate::core::handler::handle_request;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: String::new(),
        }
    }
}

impl ProxyRequest {
    /// header 名稱不分大小寫
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    fn query(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// 處理一個 proxy 事件；沒有 `httpMethod` 的直接呼叫視為 POST
pub fn handle_proxy_event(event: &ProxyRequest, function_key: Option<&str>) -> Result<ProxyResponse> {
    if let Some(method) = event.http_method.as_deref() {
        if !method.eq_ignore_ascii_case("POST") {
            tracing::warn!("Rejected {} request", method);
            let mut response = ProxyResponse::empty(405);
            response
                .headers
                .insert("Allow".to_string(), "POST".to_string());
            return Ok(response);
        }
    }

    if !auth::authorize(
        function_key,
        event.header(FUNCTION_KEY_HEADER),
        event.query(FUNCTION_KEY_QUERY),
    ) {
        tracing::warn!("🔒 Rejected request without a valid function key");
        return Ok(ProxyResponse::empty(401));
    }

    let outcome = handle_request(event.body.as_deref().unwrap_or_default().as_bytes());

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    Ok(ProxyResponse {
        status_code: outcome.status,
        headers,
        body: serde_json::to_string(&outcome.body)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ValidationResponse;

    fn event(value: serde_json::Value) -> ProxyRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_cpf_event() {
        let request = event(serde_json::json!({
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "queryStringParameters": null,
            "body": "{\"cpf\":\"111.444.777-35\"}"
        }));

        let response = handle_proxy_event(&request, None).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Content-Type"], "application/json");
        let body: ValidationResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, ValidationResponse::valid("111.444.777-35"));
    }

    #[test]
    fn test_missing_body_event() {
        let request = event(serde_json::json!({"httpMethod": "POST", "body": null}));

        let response = handle_proxy_event(&request, None).unwrap();
        assert_eq!(response.status_code, 400);
        let body: ValidationResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, ValidationResponse::missing());
    }

    #[test]
    fn test_non_post_method_rejected() {
        let request = event(serde_json::json!({"httpMethod": "GET"}));

        let response = handle_proxy_event(&request, None).unwrap();
        assert_eq!(response.status_code, 405);
        assert_eq!(response.headers["Allow"], "POST");
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_function_key_gate() {
        let body = "{\"cpf\":\"12345678909\"}";

        let no_key = event(serde_json::json!({"httpMethod": "POST", "body": body}));
        assert_eq!(handle_proxy_event(&no_key, Some("k1")).unwrap().status_code, 401);

        let header_key = event(serde_json::json!({
            "httpMethod": "POST",
            "headers": {"X-Functions-Key": "k1"},
            "body": body
        }));
        assert_eq!(handle_proxy_event(&header_key, Some("k1")).unwrap().status_code, 200);

        let query_key = event(serde_json::json!({
            "httpMethod": "POST",
            "queryStringParameters": {"code": "k1"},
            "body": body
        }));
        assert_eq!(handle_proxy_event(&query_key, Some("k1")).unwrap().status_code, 200);
    }

    #[test]
    fn test_direct_invocation_without_method() {
        let request = event(serde_json::json!({"body": "{\"cpf\":\"111.444.777-36\"}"}));

        let response = handle_proxy_event(&request, None).unwrap();
        assert_eq!(response.status_code, 400);
        let body: ValidationResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, ValidationResponse::invalid("111.444.777-36"));
    }
}
