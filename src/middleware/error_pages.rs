use std::sync::Arc;

use axum::{ extract::{ Request, State }, middleware::Next, response::Response };

use crate::{ errors::HttpError, views::RequestContext };

/// Replace the bare body of a failed request with the rendered error page.
pub async fn error_pages(
    State(context): State<Arc<dyn RequestContext>>,
    request: Request,
    next: Next
) -> Response {
    let response = next.run(request).await;

    match response.extensions().get::<HttpError>() {
        Some(error) => context.error_page(error),
        None => response,
    }
}
