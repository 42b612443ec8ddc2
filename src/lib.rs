// Library entry point - exposes the post editor as a reusable library

pub mod config;
pub mod database;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod views;

// Re-export commonly used types for convenience
pub use config::{ Config, ConfigError, DatabaseConfig, Environment, ServerConfig };
pub use errors::{ HttpError, ErrorMessage };
pub use models::Post;
pub use repositories::{ InMemoryPostRepository, PgPostRepository, PostRepository, RepositoryError };
pub use views::{ HandlebarsViews, RequestContext };

use std::sync::Arc;

use axum::{ middleware::from_fn_with_state, Router };
use tower_http::{ catch_panic::CatchPanicLayer, trace::TraceLayer };
use tracing::info;

use middleware::{
    cookies::cookie_layer,
    csrf::CsrfGuard,
    error_pages::error_pages,
    security_headers::security_headers,
};

/// Shared, request-independent collaborators of the handlers.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub context: Arc<dyn RequestContext>,
    pub csrf: CsrfGuard,
    pub environment: Environment,
}

impl AppState {
    /// Production state: PostgreSQL storage, handlebars views, and a form
    /// token guard keyed from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let csrf = match &config.server.csrf_secret {
            Some(secret) => CsrfGuard::new(secret.as_bytes(), config.server.csrf_protection),
            None => CsrfGuard::random(config.server.csrf_protection)?,
        };

        Ok(Self {
            posts: Arc::new(PgPostRepository::new(config.database.pool.clone())),
            context: Arc::new(HandlebarsViews::new()?),
            csrf: csrf.with_secure_cookie(config.server.environment.is_production()),
            environment: config.server.environment,
        })
    }

    /// State over any post storage, with the real views.
    pub fn with_repository(
        posts: Arc<dyn PostRepository>,
        csrf: CsrfGuard
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            posts,
            context: Arc::new(HandlebarsViews::new()?),
            csrf,
            environment: Environment::Development,
        })
    }
}

/// Create the complete application router with its middleware stack
pub fn create_app(state: Arc<AppState>) -> Router {
    let environment = state.environment;
    let context = state.context.clone();

    routes
        ::create_router()
        .with_state(state)
        .layer(from_fn_with_state(context, error_pages))
        .layer(cookie_layer())
        .layer(from_fn_with_state(environment, security_headers))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

/// Run migrations and optional seeding, then build the router.
pub fn initialize_app(config: &Config) -> Result<Router, ConfigError> {
    if config.database.run_migrations {
        let applied = database::run_migrations(&config.database.pool)?;
        info!(applied, "database migrations complete");
    }

    if config.database.seed_sample_posts {
        database::seed::run_initial_setup(&config.database.pool)?;
    }

    let state = Arc::new(AppState::from_config(config)?);
    Ok(create_app(state))
}
