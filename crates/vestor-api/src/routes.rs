//! Router setup with all API routes and middleware.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS middleware: allow localhost origins so a local front end on the
    // configured port (or its dev-server sibling) can call the API.
    let port = state.config.general.port;
    let dev_port = port.saturating_add(1);
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            [port, dev_port].iter().flat_map(|p| {
                [
                    format!("http://127.0.0.1:{}", p),
                    format!("http://localhost:{}", p),
                ]
            })
            .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .route("/sessions", get(handlers::list_sessions))
        .route("/sessions/{id}/history", get(handlers::session_history))
        .route("/sessions/{id}", delete(handlers::delete_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
