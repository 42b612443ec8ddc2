//! Named routes. Handlers and templates build links from here instead of
//! spelling paths out.

pub const POST_LIST: &str = "/posts";
pub const POST_EDIT: &str = "/posts/edit/{id}";
pub const HEALTH: &str = "/health";

pub fn post_edit(post_id: i32) -> String {
    format!("/posts/edit/{}", post_id)
}
