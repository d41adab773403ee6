//! Domain entities - the core business objects.

mod post;

pub use post::{ALL_FIELDS_REQUIRED, NewPost, Post, PostChanges, PostDraft, parse_due_date};
