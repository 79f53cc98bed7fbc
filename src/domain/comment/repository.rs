use super::entity::{Comment, CommentEdit, NewComment};
use super::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::profile::ProfileId;
use crate::domain::project::ProjectId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments on a project with their authors, newest first.
    async fn list_for_project(&self, product_id: ProjectId) -> DomainResult<Vec<Comment>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Returns `None` when no comment with that id belongs to the author.
    async fn update_owned(&self, edit: CommentEdit) -> DomainResult<Option<Comment>>;

    async fn delete_owned(&self, id: CommentId, author: ProfileId) -> DomainResult<()>;
}
