use std::collections::BTreeMap;

use serde::{ Deserialize, Serialize };
use validator::{ Validate, ValidationErrors };

use crate::{ models::Post, routes::paths };

pub const TITLE_MAX_LENGTH: u64 = 255;

/// How a form field is presented on the edit page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Text,
    Textarea,
}

/// One named input of the post form and the record field it is bound to.
#[derive(Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub required: bool,
    pub max_length: Option<u64>,
    get: fn(&PostForm) -> &str,
}

impl FormField {
    pub fn value<'a>(&self, form: &'a PostForm) -> &'a str {
        (self.get)(form)
    }
}

fn title_of(form: &PostForm) -> &str {
    &form.title
}

fn contents_of(form: &PostForm) -> &str {
    &form.contents
}

/// The inputs of the edit form, in display order. Each entry maps an input
/// name onto the `PostForm`/`Post` field of the same name.
pub const POST_FORM_FIELDS: [FormField; 2] = [
    FormField {
        name: "title",
        label: "Title",
        widget: Widget::Text,
        required: true,
        max_length: Some(TITLE_MAX_LENGTH),
        get: title_of,
    },
    FormField {
        name: "contents",
        label: "Contents",
        widget: Widget::Textarea,
        required: true,
        max_length: None,
        get: contents_of,
    },
];

/// Submitted edit form. Missing inputs bind as empty strings so they fail the
/// required rules instead of rejecting the request.
#[derive(Validate, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Title is required"),
        length(max = 255, message = "Title cannot be longer than 255 characters")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Contents is required"))]
    pub contents: String,

    #[serde(default, rename = "_token")]
    pub token: Option<String>,
}

impl PostForm {
    /// Pre-populate the form from the stored record.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            contents: post.contents.clone(),
            token: None,
        }
    }

    /// Copy the bound fields onto the record.
    pub fn apply_to(&self, post: &mut Post) {
        post.title.clone_from(&self.title);
        post.contents.clone_from(&self.contents);
    }
}

/// Validation messages collected while binding a submission.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FormErrors {
    pub global: Vec<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|error| {
                        error.message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field))
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        Self {
            global: Vec::new(),
            fields,
        }
    }

    pub fn add_global(&mut self, message: impl Into<String>) {
        self.global.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.fields.values().all(Vec::is_empty)
    }

    pub fn for_field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

// VIEW MODELS

#[derive(Debug, Serialize)]
pub struct PostListItem {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub edit_url: String,
}

#[derive(Debug, Serialize)]
pub struct PostListView {
    pub posts: Vec<PostListItem>,
}

impl PostListView {
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: posts
                .into_iter()
                .map(|post| PostListItem {
                    edit_url: paths::post_edit(post.id),
                    id: post.id,
                    title: post.title,
                    contents: post.contents,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FormFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub textarea: bool,
    pub required: bool,
    pub max_length: Option<u64>,
    pub value: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PostEditView {
    pub post_id: i32,
    pub action: String,
    pub list_url: &'static str,
    pub fields: Vec<FormFieldView>,
    pub form_errors: Vec<String>,
    pub csrf_token: Option<String>,
}

impl PostEditView {
    pub fn new(
        post_id: i32,
        form: &PostForm,
        errors: &FormErrors,
        csrf_token: Option<String>
    ) -> Self {
        let fields = POST_FORM_FIELDS.iter()
            .map(|field| FormFieldView {
                name: field.name,
                label: field.label,
                widget: field.widget,
                textarea: field.widget == Widget::Textarea,
                required: field.required,
                max_length: field.max_length,
                value: field.value(form).to_string(),
                errors: errors.for_field(field.name).to_vec(),
            })
            .collect();

        Self {
            post_id,
            action: paths::post_edit(post_id),
            list_url: paths::POST_LIST,
            fields,
            form_errors: errors.global.clone(),
            csrf_token,
        }
    }
}
