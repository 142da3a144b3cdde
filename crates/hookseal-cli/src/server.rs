//! HTTP binding: `POST /api/verifyJWT`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use hookseal_core::{Verifier, VerifyRequest};
use serde_json::json;

pub const ENV_BIND: &str = "HOOKSEAL_BIND";
pub const ENV_MAX_REQUEST_BYTES: &str = "HOOKSEAL_MAX_REQUEST_BYTES";

const DEFAULT_BIND: &str = "127.0.0.1:7071";
const DEFAULT_MAX_REQUEST_BYTES: usize = 2 * 1_024 * 1_024;

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 7071))
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `HOOKSEAL_BIND` | Listen address (default `127.0.0.1:7071`) |
    /// | `HOOKSEAL_MAX_REQUEST_BYTES` | Request size limit (default 2 MiB) |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_BIND) {
            match raw.trim().parse() {
                Ok(addr) => config.bind = addr,
                Err(_) => tracing::warn!(var = ENV_BIND, value = %raw, fallback = DEFAULT_BIND, "invalid value ignored"),
            }
        }
        if let Some(raw) = lookup(ENV_MAX_REQUEST_BYTES) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_request_bytes = limit,
                _ => tracing::warn!(var = ENV_MAX_REQUEST_BYTES, value = %raw, "invalid value ignored"),
            }
        }
        config
    }
}

#[derive(Clone)]
pub struct AppState {
    verifier: Arc<Verifier>,
}

impl AppState {
    pub fn new(verifier: Verifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

pub fn router(state: AppState, max_request_bytes: usize) -> Router {
    Router::new()
        .route("/api/verifyJWT", post(verify_jwt))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(max_request_bytes))
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn verify_jwt(State(state): State<AppState>, body: Bytes) -> Response {
    // Fields that cannot be read are reported as missing.
    let request: VerifyRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "request body is not a verification request");
        VerifyRequest::default()
    });

    let outcome = state.verifier.verify(&request);
    let status =
        StatusCode::from_u16(outcome.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome.to_response())).into_response()
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, verifier: Verifier) -> anyhow::Result<()> {
    let app = router(AppState::new(verifier), config.max_request_bytes);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
