use tracing::{ info, debug };
use validator::Validate;

use crate::{
    dto::{ FormErrors, PostForm },
    errors::{ ErrorMessage, HttpError },
    models::Post,
    repositories::PostRepository,
};

/// Result of handling one edit-form submission.
#[derive(Debug, PartialEq)]
pub enum EditOutcome {
    /// Valid submission; the post was written and committed.
    Saved(Post),
    /// Invalid submission; nothing was written. Carries what the user typed.
    Rejected {
        post: Post,
        form: PostForm,
        errors: FormErrors,
    },
}

pub struct PostService;

impl PostService {
    /// All posts, in storage order.
    pub fn list_posts(repository: &dyn PostRepository) -> Result<Vec<Post>, HttpError> {
        let posts = repository.find_all()?;
        debug!(count = posts.len(), "listing posts");
        Ok(posts)
    }

    /// Look a post up by the raw path segment. Anything but the canonical
    /// decimal form of an id is reported as not found, like unknown ids.
    pub fn find_post(
        repository: &dyn PostRepository,
        raw_id: &str
    ) -> Result<Option<Post>, HttpError> {
        let Some(post_id) = parse_post_id(raw_id) else {
            debug!(raw_id, "post id is not a canonical integer");
            return Ok(None);
        };

        Ok(repository.find_by_id(post_id)?)
    }

    /// A submission whose body could not be bound at all. Rejected like an
    /// invalid form, showing the stored values again.
    pub fn reject_unreadable(post: Post) -> EditOutcome {
        let mut errors = FormErrors::default();
        errors.add_global(ErrorMessage::UnreadableForm.to_string());

        debug!(post_id = post.id, "post edit body could not be bound");
        EditOutcome::Rejected {
            form: PostForm::from_post(&post),
            post,
            errors,
        }
    }

    /// Validate a submission against `post` and, when it passes, persist it.
    ///
    /// `token_valid` is the outcome of the anti-forgery check; a failed check
    /// rejects the form like any other validation error.
    pub fn submit_edit(
        repository: &dyn PostRepository,
        mut post: Post,
        form: PostForm,
        token_valid: bool
    ) -> Result<EditOutcome, HttpError> {
        let mut errors = match form.validate() {
            Ok(()) => FormErrors::default(),
            Err(validation_errors) => FormErrors::from_validation(&validation_errors),
        };

        if !token_valid {
            errors.add_global(ErrorMessage::InvalidCsrfToken.to_string());
        }

        if !errors.is_empty() {
            debug!(post_id = post.id, ?errors, "post edit rejected");
            return Ok(EditOutcome::Rejected { post, form, errors });
        }

        form.apply_to(&mut post);
        let saved = repository.save(&post)?;

        info!(post_id = saved.id, "post updated");
        Ok(EditOutcome::Saved(saved))
    }
}

/// Digits only, no sign, no leading zero, so each post has one URL.
fn parse_post_id(raw_id: &str) -> Option<i32> {
    let canonical =
        !raw_id.is_empty() &&
        raw_id.bytes().all(|b| b.is_ascii_digit()) &&
        (raw_id == "0" || !raw_id.starts_with('0'));

    if canonical { raw_id.parse().ok() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{ InMemoryPostRepository, RepositoryError };

    fn stored_post() -> Post {
        Post {
            id: 1,
            title: "First".to_string(),
            contents: "First contents".to_string(),
        }
    }

    fn repository() -> InMemoryPostRepository {
        InMemoryPostRepository::with_posts(vec![stored_post()])
    }

    fn form(title: &str, contents: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            contents: contents.to_string(),
            token: None,
        }
    }

    struct FailingRepository;

    impl PostRepository for FailingRepository {
        fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
            Err(RepositoryError::Poisoned)
        }

        fn find_by_id(&self, _post_id: i32) -> Result<Option<Post>, RepositoryError> {
            Err(RepositoryError::Poisoned)
        }

        fn save(&self, _post: &Post) -> Result<Post, RepositoryError> {
            Err(RepositoryError::Poisoned)
        }
    }

    #[test]
    fn list_posts_returns_everything_stored() {
        assert!(PostService::list_posts(&InMemoryPostRepository::new()).unwrap().is_empty());
        assert_eq!(PostService::list_posts(&repository()).unwrap(), vec![stored_post()]);
    }

    #[test]
    fn find_post_treats_unknown_and_malformed_ids_alike() {
        let repo = repository();
        assert_eq!(PostService::find_post(&repo, "1").unwrap(), Some(stored_post()));
        assert_eq!(PostService::find_post(&repo, "2").unwrap(), None);
        assert_eq!(PostService::find_post(&repo, "abc").unwrap(), None);
        assert_eq!(PostService::find_post(&repo, "99999999999").unwrap(), None);
    }

    #[test]
    fn find_post_only_accepts_the_canonical_id() {
        let repo = repository();
        for alias in [" 1", "1 ", "+1", "01", "-1", "1.0", ""] {
            assert_eq!(PostService::find_post(&repo, alias).unwrap(), None, "{:?}", alias);
        }
        assert_eq!(parse_post_id("0"), Some(0));
        assert_eq!(parse_post_id("2147483647"), Some(i32::MAX));
        assert_eq!(parse_post_id("2147483648"), None);
    }

    #[test]
    fn unreadable_submission_is_rejected_with_stored_values() {
        match PostService::reject_unreadable(stored_post()) {
            EditOutcome::Rejected { post, form, errors } => {
                assert_eq!(post, stored_post());
                assert_eq!(form, PostForm::from_post(&stored_post()));
                assert_eq!(errors.global, vec![ErrorMessage::UnreadableForm.to_string()]);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn valid_submission_is_saved() {
        let repo = repository();

        let outcome = PostService::submit_edit(
            &repo,
            stored_post(),
            form("Edited", "Edited contents"),
            true
        ).unwrap();

        let expected = Post {
            id: 1,
            title: "Edited".to_string(),
            contents: "Edited contents".to_string(),
        };
        assert_eq!(outcome, EditOutcome::Saved(expected.clone()));
        assert_eq!(repo.find_by_id(1).unwrap(), Some(expected));
    }

    #[test]
    fn invalid_submission_leaves_the_record_alone() {
        let repo = repository();

        let outcome = PostService::submit_edit(&repo, stored_post(), form("", "kept"), true).unwrap();

        match outcome {
            EditOutcome::Rejected { post, form, errors } => {
                assert_eq!(post, stored_post());
                assert_eq!(form.contents, "kept");
                assert_eq!(errors.for_field("title"), ["Title is required".to_string()]);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(repo.find_by_id(1).unwrap(), Some(stored_post()));
    }

    #[test]
    fn bad_token_rejects_an_otherwise_valid_form() {
        let repo = repository();

        let outcome = PostService::submit_edit(
            &repo,
            stored_post(),
            form("Edited", "Edited contents"),
            false
        ).unwrap();

        match outcome {
            EditOutcome::Rejected { errors, .. } => {
                assert_eq!(errors.global, vec![ErrorMessage::InvalidCsrfToken.to_string()]);
                assert!(errors.fields.is_empty());
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(repo.find_by_id(1).unwrap(), Some(stored_post()));
    }

    #[test]
    fn repeating_a_submission_is_idempotent() {
        let repo = repository();

        for _ in 0..2 {
            let current = repo.find_by_id(1).unwrap().unwrap();
            PostService::submit_edit(&repo, current, form("Same", "Same contents"), true).unwrap();
        }

        let stored = repo.find_by_id(1).unwrap().unwrap();
        assert_eq!(stored.title, "Same");
        assert_eq!(stored.contents, "Same contents");
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn storage_failures_propagate_as_server_errors() {
        let error = PostService::list_posts(&FailingRepository).unwrap_err();
        assert_eq!(error.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let error = PostService::submit_edit(
            &FailingRepository,
            stored_post(),
            form("Edited", "Edited contents"),
            true
        ).unwrap_err();
        assert_eq!(error.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
