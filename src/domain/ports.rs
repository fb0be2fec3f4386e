/// 伺服器設定來源（CLI、TOML）共用的介面
pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn route(&self) -> &str;
    fn function_key(&self) -> Option<&str>;
}
