// src/routes/mod.rs
pub mod chat;

use crate::config::RelayConfig;
use crate::state::SharedState;
use axum::{Router, routing::post};
use chat::chat_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub fn create_router(config: &RelayConfig) -> Router<SharedState> {
    Router::new()
        .route_service("/", ServeFile::new(config.index_path()))
        .route("/chat", post(chat_handler))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

/// Router with its state attached, ready to serve.
pub fn app(state: SharedState) -> Router {
    create_router(&state.config).with_state(state)
}
