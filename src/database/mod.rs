pub mod seed;

use diesel_migrations::{ embed_migrations, EmbeddedMigrations, MigrationHarness };
use tracing::info;

use crate::config::{ ConfigError, PgPool };

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every embedded migration the database has not seen yet.
pub fn run_migrations(pool: &PgPool) -> Result<usize, ConfigError> {
    let mut conn = pool.get()?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ConfigError::Migration(e.to_string()))?;

    for version in &applied {
        info!(%version, "applied migration");
    }

    Ok(applied.len())
}
