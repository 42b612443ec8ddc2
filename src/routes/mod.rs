use std::sync::Arc;

use axum::Router;

use crate::AppState;

pub mod general;
pub mod paths;
pub mod posts;

use general::general_routes;
use posts::post_routes;

/// Main application router assembly function
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // Post listing and editing
        .merge(post_routes())
        // General routes (health check, fallback)
        .merge(general_routes())
}
