use axum::{ http::StatusCode, response::{ IntoResponse, Response } };
use tokio::task::JoinError;
use std::fmt;

use crate::repositories::RepositoryError;

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    InternalServerError,
    NotFound,
    PostNotFound,
    RenderError,
    InvalidCsrfToken,
    UnreadableForm,
}

impl ToString for ErrorMessage {
    fn to_string(&self) -> String {
        self.to_str().to_owned()
    }
}

impl ErrorMessage {
    fn to_str(&self) -> &'static str {
        match self {
            ErrorMessage::InternalServerError => "Server Error. Please try again later.",
            ErrorMessage::NotFound => "The requested resource could not be found",
            ErrorMessage::PostNotFound => "The requested post could not be found",
            ErrorMessage::RenderError => "Unable to render the requested page",
            ErrorMessage::InvalidCsrfToken =>
                "The CSRF token is invalid. Please try to resubmit the form.",
            ErrorMessage::UnreadableForm =>
                "The submitted form could not be read. Please check the values and try again.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Bare text response, used when no error page can be rendered.
    pub fn plain_response(&self) -> Response {
        (self.status, self.message.clone()).into_response()
    }

    /// The plain response, tagged with the error so the `error_pages`
    /// middleware can swap in the rendered page.
    pub fn into_http_response(self) -> Response {
        let mut response = self.plain_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

// Storage failures are not handled locally; the cause is logged and the
// client only sees a generic server error.
impl From<RepositoryError> for HttpError {
    fn from(error: RepositoryError) -> Self {
        tracing::error!(error = %error, "post repository failure");
        HttpError::server_error(ErrorMessage::InternalServerError.to_string())
    }
}

impl From<JoinError> for HttpError {
    fn from(error: JoinError) -> Self {
        tracing::error!(error = %error, "blocking storage task failed");
        HttpError::server_error(ErrorMessage::InternalServerError.to_string())
    }
}
