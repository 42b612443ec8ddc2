use axum::{
    body::Body,
    extract::{ Request, State },
    http::{ HeaderMap, HeaderValue },
    middleware::Next,
    response::Response,
};

use crate::config::Environment;

const PRODUCTION_CSP: &str =
    "default-src 'self'; \
     style-src 'self' 'unsafe-inline'; \
     img-src 'self' data:; \
     object-src 'none'; \
     frame-ancestors 'none'; \
     base-uri 'self'; \
     form-action 'self'";

// Relaxed for local tooling (live reload, browser extensions).
const DEVELOPMENT_CSP: &str =
    "default-src 'self' data: blob: 'unsafe-inline' 'unsafe-eval'; \
     connect-src *; \
     form-action 'self'";

pub async fn security_headers(
    State(environment): State<Environment>,
    request: Request,
    next: Next
) -> Response {
    let mut response: Response<Body> = next.run(request).await;

    let headers: &mut HeaderMap = response.headers_mut();

    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Permitted-Cross-Domain-Policies", HeaderValue::from_static("none"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("strict-origin-when-cross-origin"));

    let csp: &'static str = if environment.is_production() {
        headers.insert(
            "Strict-Transport-Security",
            HeaderValue::from_static("max-age=15552000; includeSubDomains")
        );
        PRODUCTION_CSP
    } else {
        DEVELOPMENT_CSP
    };

    headers.insert("Content-Security-Policy", HeaderValue::from_static(csp));

    response
}
