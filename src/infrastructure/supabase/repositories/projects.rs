use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use super::{execute, fetch};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::ProfileId;
use crate::domain::project::{Project, ProjectId, ProjectRepository, ProjectUpdate};
use crate::infrastructure::supabase::{
    client::SupabaseClient,
    postgrest::{Query, returning, table_request},
};

const PRODUCTS: &str = "products";

pub struct SupabaseProjectRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseProjectRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    id: i64,
    profile_id: Uuid,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    github_url: Option<String>,
    #[serde(default)]
    demo_url: Option<String>,
    #[serde(default)]
    tech_stack: Option<Vec<String>>,
    #[serde(default)]
    lessons_learned: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DomainError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProjectId::new(row.id)?,
            profile_id: ProfileId(row.profile_id),
            title: row.title.unwrap_or_default(),
            slug: row.slug,
            description: row.description,
            status: row.status,
            github_url: row.github_url,
            demo_url: row.demo_url,
            tech_stack: row.tech_stack.unwrap_or_default(),
            lessons_learned: row.lessons_learned,
            thumbnail_url: row.thumbnail_url,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SlugRow {
    slug: Option<String>,
}

/// Column set written by an update. Optional text columns other than
/// title/description/status are always sent so `None` clears them.
fn update_body(update: ProjectUpdate) -> Value {
    let mut body = Map::new();
    if let Some(title) = update.title {
        body.insert("title".into(), Value::String(title.into_inner()));
    }
    if let Some(description) = update.description {
        body.insert("description".into(), Value::String(description));
    }
    if let Some(status) = update.status {
        body.insert("status".into(), Value::String(status));
    }
    body.insert("github_url".into(), json!(update.github_url));
    body.insert("demo_url".into(), json!(update.demo_url));
    body.insert("tech_stack".into(), json!(update.tech_stack));
    body.insert("lessons_learned".into(), json!(update.lessons_learned));
    body.insert("thumbnail_url".into(), json!(update.thumbnail_url));
    if let Some(slug) = update.slug {
        body.insert("slug".into(), Value::String(slug.into_inner()));
    }
    Value::Object(body)
}

#[async_trait]
impl ProjectRepository for SupabaseProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        let query = Query::new().select("*").eq("id", id).limit(1);
        let rows: Vec<ProjectRow> =
            fetch(table_request(&self.client, Method::GET, PRODUCTS, &query)).await?;
        rows.into_iter().next().map(Project::try_from).transpose()
    }

    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: ProjectId,
    ) -> DomainResult<Vec<String>> {
        let query = Query::new()
            .select("slug")
            .like("slug", &format!("{prefix}*"))
            .neq("id", exclude);
        let rows: Vec<SlugRow> =
            fetch(table_request(&self.client, Method::GET, PRODUCTS, &query)).await?;
        Ok(rows.into_iter().filter_map(|row| row.slug).collect())
    }

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project> {
        let id = update.id;
        let query = Query::new().eq("id", id).select("*");
        let body = update_body(update);

        let request = table_request(&self.client, Method::PATCH, PRODUCTS, &query)
            .map(|r| returning(r).json(&body));
        let rows: Vec<ProjectRow> = fetch(request).await?;

        rows.into_iter()
            .next()
            .map(Project::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("Project not found".into()))
    }

    async fn set_thumbnail_url(&self, id: ProjectId, url: &str) -> DomainResult<()> {
        let query = Query::new().eq("id", id);
        let request = table_request(&self.client, Method::PATCH, PRODUCTS, &query)
            .map(|r| r.json(&json!({ "thumbnail_url": url })));
        execute(request).await
    }
}
