use std::sync::Arc;
use axum::{ routing::get, Router };

use crate::{ AppState, handlers::post_handlers::{ list_posts, edit_post, submit_post }, routes::paths };

// POST ROUTER
pub fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(paths::POST_LIST, get(list_posts))
        .route(paths::POST_EDIT, get(edit_post).post(submit_post))
}
