use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{execute, fetch};
use crate::domain::comment::{
    Comment, CommentAuthor, CommentEdit, CommentId, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::ProfileId;
use crate::domain::project::ProjectId;
use crate::infrastructure::supabase::{
    client::SupabaseClient,
    postgrest::{Query, returning, table_request},
};

const COMMENTS: &str = "comments";
const WITH_AUTHOR: &str = "*, profiles:profile_id (username, full_name, avatar_url)";

pub struct SupabaseCommentRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseCommentRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AuthorRow {
    username: Option<String>,
    full_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentRow {
    id: i64,
    product_id: i64,
    profile_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    profiles: Option<AuthorRow>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            product_id: ProjectId::new(row.product_id)?,
            profile_id: ProfileId(row.profile_id),
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author: row.profiles.map(|author| CommentAuthor {
                username: author.username,
                full_name: author.full_name,
                avatar_url: author.avatar_url,
            }),
        })
    }
}

fn into_comments(rows: Vec<CommentRow>) -> DomainResult<Vec<Comment>> {
    rows.into_iter().map(Comment::try_from).collect()
}

#[async_trait]
impl CommentRepository for SupabaseCommentRepository {
    async fn list_for_project(&self, product_id: ProjectId) -> DomainResult<Vec<Comment>> {
        let query = Query::new()
            .select(WITH_AUTHOR)
            .eq("product_id", product_id)
            .order("created_at", false);
        let rows: Vec<CommentRow> =
            fetch(table_request(&self.client, Method::GET, COMMENTS, &query)).await?;
        into_comments(rows)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let query = Query::new().select(WITH_AUTHOR);
        let body = json!({
            "product_id": i64::from(comment.product_id),
            "profile_id": comment.profile_id,
            "content": comment.content.as_str(),
        });

        let request = table_request(&self.client, Method::POST, COMMENTS, &query)
            .map(|r| returning(r).json(&body));
        let rows: Vec<CommentRow> = fetch(request).await?;

        into_comments(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Persistence("comment insert returned no row".into()))
    }

    async fn update_owned(&self, edit: CommentEdit) -> DomainResult<Option<Comment>> {
        let query = Query::new()
            .eq("id", edit.id)
            .eq("profile_id", edit.author)
            .select(WITH_AUTHOR);
        let body = json!({
            "content": edit.content.as_str(),
            "updated_at": edit.updated_at,
        });

        let request = table_request(&self.client, Method::PATCH, COMMENTS, &query)
            .map(|r| returning(r).json(&body));
        let rows: Vec<CommentRow> = fetch(request).await?;
        Ok(into_comments(rows)?.into_iter().next())
    }

    async fn delete_owned(&self, id: CommentId, author: ProfileId) -> DomainResult<()> {
        let query = Query::new().eq("id", id).eq("profile_id", author);
        execute(table_request(&self.client, Method::DELETE, COMMENTS, &query)).await
    }
}
