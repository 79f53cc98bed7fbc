use crate::domain::comment::{Comment, CommentAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentAuthorDto {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<CommentAuthor> for CommentAuthorDto {
    fn from(author: CommentAuthor) -> Self {
        Self {
            username: author.username,
            full_name: author.full_name,
            avatar_url: author.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub product_id: i64,
    pub profile_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Author profile; named after the embedded relation clients already read.
    #[serde(default)]
    pub profiles: Option<CommentAuthorDto>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            product_id: comment.product_id.into(),
            profile_id: comment.profile_id.into(),
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            profiles: comment.author.map(Into::into),
        }
    }
}
