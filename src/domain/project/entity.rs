use super::value_objects::{ProjectId, ProjectSlug, ProjectTitle};
use crate::domain::profile::ProfileId;
use chrono::{DateTime, Utc};

/// A showcased project (stored in the `products` table).
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub profile_id: ProfileId,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub lessons_learned: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn title_differs(&self, title: &ProjectTitle) -> bool {
        self.title != title.as_str()
    }
}

/// Field set written by a project edit.
///
/// `title`, `description` and `status` are only written when present; the
/// remaining optional fields are always written and `None` clears them.
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub id: ProjectId,
    pub title: Option<ProjectTitle>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub lessons_learned: Option<String>,
    pub thumbnail_url: Option<String>,
    pub slug: Option<ProjectSlug>,
}

impl ProjectUpdate {
    pub const fn new(id: ProjectId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            status: None,
            github_url: None,
            demo_url: None,
            tech_stack: Vec::new(),
            lessons_learned: None,
            thumbnail_url: None,
            slug: None,
        }
    }

    pub fn with_slug(mut self, slug: ProjectSlug) -> Self {
        self.slug = Some(slug);
        self
    }
}
