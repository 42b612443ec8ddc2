use diesel::{ prelude::*, PgConnection };
use tracing::info;

use crate::{ config::{ ConfigError, PgPool }, models::NewPost, schema::posts };

fn sample_posts() -> Vec<NewPost> {
    vec![
        NewPost {
            title: "Welcome".to_string(),
            contents: "This is the first post. Use the edit link to change it.".to_string(),
        },
        NewPost {
            title: "Second post".to_string(),
            contents: "Posts are listed in the order the database returns them.".to_string(),
        },
        NewPost {
            title: "Formatting".to_string(),
            contents: "Contents are stored as plain text and escaped when rendered.".to_string(),
        }
    ]
}

/// Insert the sample posts when the table is empty. Returns how many rows were
/// inserted; an existing table is left untouched.
pub fn seed_sample_posts(conn: &mut PgConnection) -> QueryResult<usize> {
    let existing: i64 = posts::table.count().get_result(conn)?;

    if existing > 0 {
        info!(existing, "posts already present, skipping sample data");
        return Ok(0);
    }

    let inserted = diesel::insert_into(posts::table).values(&sample_posts()).execute(conn)?;

    info!(inserted, "seeded sample posts");
    Ok(inserted)
}

// Call this during application startup when SEED_SAMPLE_POSTS is set
pub fn run_initial_setup(pool: &PgPool) -> Result<usize, ConfigError> {
    let mut conn = pool.get()?;
    Ok(seed_sample_posts(&mut conn)?)
}
