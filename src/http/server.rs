//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, locale gate)
//! - Serve the health check outside the gate
//! - Forward gated requests to the upstream site server

use axum::{
    body::Body,
    extract::State,
    http::{
        header,
        uri::{Authority, InvalidUri, PathAndQuery, Scheme},
        Request, StatusCode, Uri, Version,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GateConfig;
use crate::http::middleware::{locale_gate_middleware, LocaleGate};
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;

/// Error type for server setup and serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid upstream address `{address}`: {source}")]
    InvalidUpstream {
        address: String,
        #[source]
        source: InvalidUri,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Client<HttpConnector, Body>,
    pub upstream: Authority,
}

/// HTTP server for the locale gate.
pub struct HttpServer {
    router: Router,
    gate: Arc<LocaleGate>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &GateConfig) -> Result<Self, ServerError> {
        let upstream: Authority =
            config
                .upstream
                .address
                .parse()
                .map_err(|source| ServerError::InvalidUpstream {
                    address: config.upstream.address.clone(),
                    source,
                })?;

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        let gate = Arc::new(LocaleGate::from_config(config));

        let state = AppState { client, upstream };
        let router = Self::build_router(config, state, gate.clone());
        Ok(Self { router, gate })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GateConfig, state: AppState, gate: Arc<LocaleGate>) -> Router {
        let gated = Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(middleware::from_fn_with_state(gate, locale_gate_middleware));

        Router::new()
            .route("/health", get(health_handler))
            .merge(gated)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            locales = %self.gate.locales(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        "Server is running\n",
    )
}

/// Forward the request to the upstream, preserving method, headers, body
/// and path+query.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&request).to_string();
    let method = request.method().to_string();

    let (mut parts, body) = request.into_parts();
    let mut uri_parts = parts.uri.clone().into_parts();
    uri_parts.scheme = Some(Scheme::HTTP);
    uri_parts.authority = Some(state.upstream.clone());
    if uri_parts.path_and_query.is_none() {
        uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    parts.uri = match Uri::from_parts(uri_parts) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to build upstream URI");
            return (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response();
        }
    };
    // The upstream connector speaks HTTP/1.1 regardless of the client's version.
    parts.version = Version::HTTP_11;

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        uri = %parts.uri,
        "Forwarding request"
    );

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            metrics::record_request(&method, response.status().as_u16(), start_time);
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            metrics::record_request(&method, StatusCode::BAD_GATEWAY.as_u16(), start_time);
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_upstream() {
        let mut config = GateConfig::default();
        config.upstream.address = "not a host".into();
        assert!(matches!(
            HttpServer::new(&config),
            Err(ServerError::InvalidUpstream { .. })
        ));
    }
}
