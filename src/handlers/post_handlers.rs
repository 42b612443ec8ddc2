use std::sync::Arc;

use axum::{
    extract::{ rejection::FormRejection, Path, State },
    response::Response,
    Form,
};
use tower_cookies::Cookies;
use tracing::debug;

use crate::{
    dto::{ FormErrors, PostEditView, PostForm, PostListView },
    errors::HttpError,
    middleware::csrf::POST_EDIT_INTENT,
    models::Post,
    routes::paths,
    services::{ EditOutcome, PostService },
    views::{ view_data, View },
    AppState,
};

// Diesel and r2d2 block; keep them off the async workers.
async fn blocking<T, F>(task: F) -> Result<T, HttpError>
    where T: Send + 'static, F: FnOnce() -> Result<T, HttpError> + Send + 'static
{
    tokio::task::spawn_blocking(task).await?
}

async fn find_post(state: &AppState, raw_id: String) -> Result<Post, HttpError> {
    let posts = state.posts.clone();
    blocking(move || PostService::find_post(posts.as_ref(), &raw_id)).await?.ok_or_else(|| {
        state.context.not_found()
    })
}

/// GET ALL POSTS
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Response, HttpError> {
    let posts = state.posts.clone();
    let posts = blocking(move || PostService::list_posts(posts.as_ref())).await?;
    let view = PostListView::from_posts(posts);

    state.context.render(View::PostIndex, &view_data(&view)?)
}

/// SHOW EDIT FORM
pub async fn edit_post(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    cookies: Cookies
) -> Result<Response, HttpError> {
    let post = find_post(&state, raw_id).await?;

    let token = state.csrf.issue(&cookies, POST_EDIT_INTENT);
    let view = PostEditView::new(post.id, &PostForm::from_post(&post), &FormErrors::default(), token);

    state.context.render(View::PostEdit, &view_data(&view)?)
}

/// SUBMIT EDIT FORM
///
/// The post is looked up before the body is looked at, so unknown ids are a
/// 404 whatever was sent, and a body that cannot be bound re-renders the form.
pub async fn submit_post(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    cookies: Cookies,
    form: Result<Form<PostForm>, FormRejection>
) -> Result<Response, HttpError> {
    let post = find_post(&state, raw_id).await?;

    let outcome = match form {
        Ok(Form(form)) => {
            let token_valid = state.csrf.verify(&cookies, POST_EDIT_INTENT, form.token.as_deref());
            let posts = state.posts.clone();
            blocking(move || PostService::submit_edit(posts.as_ref(), post, form, token_valid)).await?
        }
        Err(rejection) => {
            debug!(status = %rejection.status(), error = %rejection.body_text(), "edit form rejected");
            PostService::reject_unreadable(post)
        }
    };

    match outcome {
        EditOutcome::Saved(_) => Ok(state.context.redirect(paths::POST_LIST)),
        EditOutcome::Rejected { post, form, errors } => {
            let token = state.csrf.issue(&cookies, POST_EDIT_INTENT);
            let view = PostEditView::new(post.id, &form, &errors, token);

            state.context.render(View::PostEdit, &view_data(&view)?)
        }
    }
}

