use diesel::prelude::*;
use tracing::debug;

use crate::{
    config::PgPool,
    models::{ Post, PostChangeset },
    repositories::{ PostRepository, RepositoryError },
    schema::posts,
};

/// PostgreSQL-backed post storage on top of the r2d2 pool.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    // GET ALL POSTS
    fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let mut conn = self.pool.get()?;

        let all_posts = posts::table
            .select(Post::as_select())
            .order(posts::id.asc())
            .load::<Post>(&mut conn)?;

        debug!(count = all_posts.len(), "loaded posts");
        Ok(all_posts)
    }

    // GET POST BY ID
    fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, RepositoryError> {
        let mut conn = self.pool.get()?;

        let post = posts::table
            .find(post_id)
            .select(Post::as_select())
            .first::<Post>(&mut conn)
            .optional()?;

        Ok(post)
    }

    // UPDATE POST
    fn save(&self, post: &Post) -> Result<Post, RepositoryError> {
        let mut conn = self.pool.get()?;

        let saved = conn.transaction::<Option<Post>, diesel::result::Error, _>(|conn| {
            diesel
                ::update(posts::table.find(post.id))
                .set(&PostChangeset::from(post))
                .returning(Post::as_returning())
                .get_result::<Post>(conn)
                .optional()
        })?;

        saved.ok_or(RepositoryError::Missing(post.id))
    }
}
