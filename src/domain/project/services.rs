use std::{collections::HashSet, sync::Arc};

use super::repository::ProjectRepository;
use super::slug::{is_canonical_slug, make_unique};
use super::value_objects::{ProjectId, ProjectSlug, ProjectTitle};
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for projects.
pub struct ProjectSlugService {
    repo: Arc<dyn ProjectRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ProjectSlugService {
    pub fn new(repo: Arc<dyn ProjectRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// Slug for `title` that no other project uses, or `None` when the title
    /// has no word characters (the current slug is then kept).
    pub async fn unique_slug_for(
        &self,
        title: &ProjectTitle,
        project_id: ProjectId,
    ) -> DomainResult<Option<ProjectSlug>> {
        let base = self.generator.slugify(title.as_str());
        if !is_canonical_slug(&base) {
            return Ok(None);
        }

        let taken: HashSet<String> = self
            .repo
            .slugs_with_prefix(&base, project_id)
            .await?
            .into_iter()
            .collect();

        ProjectSlug::new(make_unique(&base, &taken)).map(Some)
    }
}
