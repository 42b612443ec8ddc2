pub mod post_repository;
pub mod in_memory_post_repository;

use thiserror::Error;
use diesel::{ r2d2::PoolError, result::Error as DieselError };

use crate::models::Post;

pub use post_repository::PgPostRepository;
pub use in_memory_post_repository::InMemoryPostRepository;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Connection pool error: {0}")] Pool(#[from] PoolError),

    #[error("Database error: {0}")] Diesel(#[from] DieselError),

    #[error("Post {0} vanished before the update was committed")] Missing(i32),

    #[error("In-memory post store lock was poisoned")]
    Poisoned,
}

/// Storage capability used by the post handlers.
///
/// `save` writes the editable fields of an existing post and commits them
/// before returning; a successful result is the committed record.
/// Concurrent saves of the same post are last-write-wins.
pub trait PostRepository: Send + Sync {
    fn find_all(&self) -> Result<Vec<Post>, RepositoryError>;

    fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, RepositoryError>;

    fn save(&self, post: &Post) -> Result<Post, RepositoryError>;
}
