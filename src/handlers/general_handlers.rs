use axum::response::Redirect;

use crate::{ errors::{ HttpError, ErrorMessage }, routes::paths };

pub async fn handler_404() -> HttpError {
    HttpError::not_found(ErrorMessage::NotFound.to_string())
}

pub async fn root() -> Redirect {
    Redirect::to(paths::POST_LIST)
}

pub async fn health_check() -> &'static str {
    "OK"
}
