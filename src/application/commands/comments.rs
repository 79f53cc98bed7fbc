use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{CommentContent, CommentEdit, CommentId, CommentRepository, NewComment},
        notification::{NewNotification, NotificationRepository},
        project::ProjectId,
    },
};

pub struct CreateCommentCommand {
    pub product_id: Option<String>,
    pub content: Option<String>,
}

pub struct EditCommentCommand {
    pub comment_id: Option<String>,
    pub content: Option<String>,
}

pub struct DeleteCommentCommand {
    pub comment_id: Option<String>,
}

pub struct CommentCommandService {
    comments: Arc<dyn CommentRepository>,
    notifications: Arc<dyn NotificationRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        notifications: Arc<dyn NotificationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            notifications,
            clock,
        }
    }

    /// Post a comment as `actor`, then record a comment notification for
    /// the same user. A failed notification does not fail the comment.
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let (Some(product_id), Some(content)) = (
            non_empty(command.product_id),
            non_empty(command.content),
        ) else {
            return Err(ApplicationError::validation(
                "Product ID and content are required",
            ));
        };

        let comment = self
            .comments
            .insert(NewComment {
                product_id: product_id.parse::<ProjectId>()?,
                profile_id: actor.profile_id(),
                content: CommentContent::new(content)?,
            })
            .await?;

        if let Err(err) = self
            .notifications
            .insert(NewNotification::for_comment(actor.id, comment.id))
            .await
        {
            tracing::warn!(error = %err, comment_id = %comment.id, "failed to record comment notification");
        }

        Ok(comment.into())
    }

    pub async fn edit_comment(
        &self,
        actor: &AuthenticatedUser,
        command: EditCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let (Some(comment_id), Some(content)) = (
            non_empty(command.comment_id),
            non_empty(command.content),
        ) else {
            return Err(ApplicationError::validation(
                "Comment ID and content are required",
            ));
        };

        let edit = CommentEdit {
            id: comment_id.parse::<CommentId>()?,
            author: actor.profile_id(),
            content: CommentContent::new(content)?,
            updated_at: self.clock.now(),
        };

        self.comments
            .update_owned(edit)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Comment not found"))
    }

    /// Deletes only when the comment belongs to `actor`; deleting someone
    /// else's comment is a silent no-op.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment_id = non_empty(command.comment_id)
            .ok_or_else(|| ApplicationError::validation("Comment ID is required"))?
            .parse::<CommentId>()?;

        self.comments
            .delete_owned(comment_id, actor.profile_id())
            .await?;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
