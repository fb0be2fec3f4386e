//! Function key 檢查：設定了 key 時，請求必須以 header 或 `code` 查詢參數帶上。

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";
pub const FUNCTION_KEY_QUERY: &str = "code";

pub fn authorize(expected: Option<&str>, header: Option<&str>, query_code: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(key) => header == Some(key) || query_code == Some(key),
    }
}

/// 從原始查詢字串取出 `code` 參數
pub fn query_code(raw_query: Option<&str>) -> Option<String> {
    let raw_query = raw_query?;
    url::form_urlencoded::parse(raw_query.as_bytes())
        .find(|(name, _)| name == FUNCTION_KEY_QUERY)
        .map(|(_, value)| value.into_owned())
}
