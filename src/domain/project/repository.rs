use super::entity::{Project, ProjectUpdate};
use super::value_objects::ProjectId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>>;

    /// Slugs starting with `prefix`, excluding the project `exclude`.
    async fn slugs_with_prefix(&self, prefix: &str, exclude: ProjectId)
    -> DomainResult<Vec<String>>;

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project>;

    async fn set_thumbnail_url(&self, id: ProjectId, url: &str) -> DomainResult<()>;
}
