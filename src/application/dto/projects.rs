use crate::domain::project::Project;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i64,
    pub profile_id: Uuid,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub lessons_learned: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.into(),
            profile_id: project.profile_id.into(),
            title: project.title,
            slug: project.slug,
            description: project.description,
            status: project.status,
            github_url: project.github_url,
            demo_url: project.demo_url,
            tech_stack: project.tech_stack,
            lessons_learned: project.lessons_learned,
            thumbnail_url: project.thumbnail_url,
            created_at: project.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThumbnailDto {
    pub thumbnail_url: String,
}
