use anyhow::Context;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use prometheus::{Encoder, TextEncoder};
use routes::{category_router, questions_router, quizzes_router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::{ApiError, ApiResponse};
use super::routes;
use crate::catalog::TriviaStore;

/// The whole API over `store`, including the JSON 404/405 fallbacks.
pub fn router<S: TriviaStore>(store: S) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .merge(category_router())
        .merge(questions_router())
        .merge(quizzes_router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(|| async {
            tracing::info!("Fallback");
            ApiError::NotFound("no such route".to_owned())
        })
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run_server(pool: SqlitePool, addr: &str) -> anyhow::Result<()> {
    let app = router(pool);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind to {addr}"))?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn metrics() -> ApiResponse<Response> {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder
        .encode(&metrics, &mut buf)
        .context("Cannot encode metrics")?;
    Ok(([(header::CONTENT_TYPE, encoder.format_type().to_owned())], buf).into_response())
}
