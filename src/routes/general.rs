use axum::{ routing::get, Router };
use std::sync::Arc;
use crate::{ AppState, handlers::general_handlers::*, routes::paths };

pub fn general_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route(paths::HEALTH, get(health_check))
        .fallback(handler_404)
}
