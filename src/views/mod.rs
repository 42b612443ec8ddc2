use axum::{
    http::{ header, StatusCode },
    response::{ Html, IntoResponse, Response },
};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::{ config::ConfigError, errors::{ ErrorMessage, HttpError }, routes::paths };

/// Named views the handlers can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    PostIndex,
    PostEdit,
    NotFound,
    Error,
}

impl View {
    pub fn template_name(&self) -> &'static str {
        match self {
            View::PostIndex => "posts/index",
            View::PostEdit => "posts/edit",
            View::NotFound => "errors/not_found",
            View::Error => "errors/error",
        }
    }
}

/// What a handler needs from its surroundings to answer a request: render a
/// view, redirect, or give up with not-found.
pub trait RequestContext: Send + Sync {
    fn render(&self, view: View, data: &Value) -> Result<Response, HttpError>;

    fn redirect(&self, location: &str) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
    }

    fn not_found(&self) -> HttpError {
        HttpError::not_found(ErrorMessage::PostNotFound.to_string())
    }

    /// Page shown for a failed request.
    fn error_page(&self, error: &HttpError) -> Response {
        error.plain_response()
    }
}

#[derive(Serialize)]
struct ErrorPageView<'a> {
    status: u16,
    reason: &'static str,
    message: &'a str,
    list_url: &'static str,
}

/// Serialize a view model into the data mapping handed to `render`.
pub fn view_data<T: Serialize>(model: &T) -> Result<Value, HttpError> {
    serde_json::to_value(model).map_err(|e| {
        error!(error = %e, "failed to serialize view data");
        HttpError::server_error(ErrorMessage::RenderError.to_string())
    })
}

const TEMPLATES: [(&str, &str); 4] = [
    ("posts/index", include_str!("templates/posts/index.hbs")),
    ("posts/edit", include_str!("templates/posts/edit.hbs")),
    ("errors/not_found", include_str!("templates/errors/not_found.hbs")),
    ("errors/error", include_str!("templates/errors/error.hbs")),
];

const PARTIALS: [(&str, &str); 2] = [
    ("header", include_str!("templates/partials/header.hbs")),
    ("footer", include_str!("templates/partials/footer.hbs")),
];

/// Handlebars templates compiled once at start-up.
pub struct HandlebarsViews {
    registry: Handlebars<'static>,
}

impl HandlebarsViews {
    pub fn new() -> Result<Self, ConfigError> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS {
            registry
                .register_partial(name, source)
                .map_err(|e| ConfigError::Config(format!("Invalid partial {}: {}", name, e)))?;
        }

        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| ConfigError::Config(format!("Invalid template {}: {}", name, e)))?;
        }

        Ok(Self { registry })
    }

    pub fn render_html(&self, view: View, data: &Value) -> Result<String, HttpError> {
        self.registry.render(view.template_name(), data).map_err(|e| {
            error!(template = view.template_name(), error = %e, "failed to render template");
            HttpError::server_error(ErrorMessage::RenderError.to_string())
        })
    }
}

impl RequestContext for HandlebarsViews {
    fn render(&self, view: View, data: &Value) -> Result<Response, HttpError> {
        Ok(Html(self.render_html(view, data)?).into_response())
    }

    fn error_page(&self, error: &HttpError) -> Response {
        let view = if error.status == StatusCode::NOT_FOUND { View::NotFound } else { View::Error };
        let page = ErrorPageView {
            status: error.status.as_u16(),
            reason: error.status.canonical_reason().unwrap_or("Error"),
            message: &error.message,
            list_url: paths::POST_LIST,
        };

        match view_data(&page).and_then(|data| self.render_html(view, &data)) {
            Ok(html) => (error.status, Html(html)).into_response(),
            Err(_) => error.plain_response(),
        }
    }
}
