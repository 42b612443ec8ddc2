use std::{ collections::BTreeMap, sync::RwLock };

use crate::{ models::Post, repositories::{ PostRepository, RepositoryError } };

/// Process-local post storage, iterated in id order. Used by the test suites
/// and for running the editor without a database.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i32, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts = posts
            .into_iter()
            .map(|post| (post.id, post))
            .collect();

        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl PostRepository for InMemoryPostRepository {
    fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = self.posts.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(posts.values().cloned().collect())
    }

    fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, RepositoryError> {
        let posts = self.posts.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(posts.get(&post_id).cloned())
    }

    fn save(&self, post: &Post) -> Result<Post, RepositoryError> {
        let mut posts = self.posts.write().map_err(|_| RepositoryError::Poisoned)?;

        let stored = posts.get_mut(&post.id).ok_or(RepositoryError::Missing(post.id))?;
        stored.title.clone_from(&post.title);
        stored.contents.clone_from(&post.contents);

        Ok(stored.clone())
    }
}
