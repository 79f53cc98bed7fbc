use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentRepository, project::ProjectId},
};

pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    /// Comments on a project with their authors, newest first.
    pub async fn list_for_project(
        &self,
        product_id: Option<&str>,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let product_id = product_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("Product ID is required"))?
            .parse::<ProjectId>()?;

        let comments = self.comments.list_for_project(product_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
