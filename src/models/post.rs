use diesel::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::schema::posts;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub contents: String,
}

#[derive(Insertable, Deserialize, Clone)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

/// The editable columns of a post. The primary key is never part of an update.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = posts)]
pub struct PostChangeset<'a> {
    pub title: &'a str,
    pub contents: &'a str,
}

impl<'a> From<&'a Post> for PostChangeset<'a> {
    fn from(post: &'a Post) -> Self {
        PostChangeset {
            title: &post.title,
            contents: &post.contents,
        }
    }
}
