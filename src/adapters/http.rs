use crate::core::auth::{self, FUNCTION_KEY_HEADER};
use crate::core::handler::handle_request;
use crate::core::ConfigProvider;
use crate::utils::error::{CpfError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    function_key: Option<Arc<str>>,
}

/// 建立只有一條 POST 路由的 router
pub fn router(route: &str, function_key: Option<&str>) -> Router {
    let state = AppState {
        function_key: function_key.map(Arc::from),
    };

    Router::new()
        .route(route, post(validate_cpf))
        .with_state(state)
}

async fn validate_cpf(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Response {
    let header_key = headers
        .get(FUNCTION_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    let query_code = auth::query_code(uri.query());

    if !auth::authorize(
        state.function_key.as_deref(),
        header_key,
        query_code.as_deref(),
    ) {
        tracing::warn!("🔒 Rejected request without a valid function key");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let outcome = handle_request(&body);
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome.body)).into_response()
}

/// 依設定綁定位址並執行到收到 Ctrl-C
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let listener = TcpListener::bind((config.host(), config.port()))
        .await
        .map_err(|e| CpfError::ServerError {
            message: format!("Failed to bind {}:{}: {}", config.host(), config.port(), e),
        })?;

    tracing::info!(
        "🚀 Listening on http://{}:{}{}",
        config.host(),
        config.port(),
        config.route()
    );
    if config.function_key().is_some() {
        tracing::info!("🔒 Function key required");
    }

    let app = router(config.route(), config.function_key());
    serve_listener(listener, app, shutdown_signal()).await
}

/// 在已綁定的 listener 上執行，`shutdown` 完成後優雅關閉
pub async fn serve_listener<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(CpfError::IoError)?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("🛑 Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
