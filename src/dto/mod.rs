pub mod post_dtos;

pub use post_dtos::{ FormErrors, PostEditView, PostForm, PostListView, POST_FORM_FIELDS };
