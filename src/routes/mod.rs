//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page and stylesheet are rendered in-process; any other path
//! is looked up in the public directory and falls back to the not-found page
//! with a 404 status.

use axum::Router;
use axum::extract::State;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::pages::{self, layout::STYLESHEET_HREF};
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let public = ServeDir::new(&state.public_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(home))
        .route(STYLESHEET_HREF, get(stylesheet))
        .route("/healthz", get(healthz))
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Html<String> {
    Html(pages::render_home())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], pages::GLOBALS_CSS)
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::render_not_found()))
}

/// Liveness probe. Pings the database only when one is configured.
async fn healthz(State(state): State<AppState>) -> StatusCode {
    let Some(pool) = &state.pool else {
        return StatusCode::OK;
    };
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "health check database ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
