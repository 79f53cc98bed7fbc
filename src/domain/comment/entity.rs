use super::value_objects::{CommentContent, CommentId};
use crate::domain::profile::ProfileId;
use crate::domain::project::ProjectId;
use chrono::{DateTime, Utc};

/// Public fields of the profile that wrote a comment.
#[derive(Debug, Clone, Default)]
pub struct CommentAuthor {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub product_id: ProjectId,
    pub profile_id: ProfileId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author: Option<CommentAuthor>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub product_id: ProjectId,
    pub profile_id: ProfileId,
    pub content: CommentContent,
}

/// Content change scoped to the comment's author.
#[derive(Debug, Clone)]
pub struct CommentEdit {
    pub id: CommentId,
    pub author: ProfileId,
    pub content: CommentContent,
    pub updated_at: DateTime<Utc>,
}
