//! # Pagekit Server
//!
//! REST service over a [`TemplateRepository`](pagekit_gateway::TemplateRepository).
//!
//! ```text
//! GET    /templates             list (defaults first)
//! POST   /templates             create (201)
//! GET    /templates/:id         fetch
//! PUT    /templates/:id         update (?expectedVersion=N)
//! DELETE /templates/:id         delete (400 for defaults)
//! POST   /templates/:id/apply   record one use
//! GET    /registry?surface=     component palette
//! GET    /health
//! ```
//!
//! Every non-2xx response carries the `ErrorResponse` envelope.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/registry", get(routes::registry))
        .route(
            "/templates",
            get(routes::list_templates).post(routes::create_template),
        )
        .route(
            "/templates/:id",
            get(routes::get_template)
                .put(routes::update_template)
                .delete(routes::delete_template),
        )
        .route("/templates/:id/apply", post(routes::apply_template))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve until the listener fails
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "template server listening");
    }
    axum::serve(listener, router(state)).await
}
