use std::sync::Arc;

use super::uploads::{THUMBNAIL_POLICY, UploadedFile, discard_previous};
use crate::{
    application::{
        dto::{AuthenticatedUser, ProjectDto, ThumbnailDto},
        error::{ApplicationError, ApplicationResult},
        ports::{
            storage::{ObjectStorage, THUMBNAIL_BUCKET},
            time::Clock,
        },
    },
    domain::{
        profile::ProfileRepository,
        project::{
            Project, ProjectId, ProjectRepository, ProjectTitle, ProjectUpdate,
            services::ProjectSlugService,
        },
    },
};

pub struct UpdateProjectCommand {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub lessons_learned: Option<String>,
    pub thumbnail_url: Option<String>,
}

pub struct UploadThumbnailCommand {
    pub file: Option<UploadedFile>,
    pub project_id: Option<String>,
}

pub struct ProjectCommandService {
    projects: Arc<dyn ProjectRepository>,
    profiles: Arc<dyn ProfileRepository>,
    storage: Arc<dyn ObjectStorage>,
    slug_service: Arc<ProjectSlugService>,
    clock: Arc<dyn Clock>,
}

impl ProjectCommandService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        profiles: Arc<dyn ProfileRepository>,
        storage: Arc<dyn ObjectStorage>,
        slug_service: Arc<ProjectSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            projects,
            profiles,
            storage,
            slug_service,
            clock,
        }
    }

    /// Edit a project owned by `actor`. The slug is regenerated only when
    /// the title actually changes.
    pub async fn update_project(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let id = command.id.parse::<ProjectId>()?;
        let project = self.owned_project(actor, id).await?;

        let title = command
            .title
            .filter(|t| !t.trim().is_empty())
            .map(ProjectTitle::new)
            .transpose()?;

        let mut update = ProjectUpdate::new(id);
        if let Some(title) = &title
            && project.title_differs(title)
        {
            if let Some(slug) = self.slug_service.unique_slug_for(title, id).await? {
                tracing::debug!(project_id = %id, slug = %slug, "project slug replaced");
                update = update.with_slug(slug);
            }
        }

        update.title = title;
        update.description = command.description;
        update.status = command.status;
        update.github_url = blank_to_none(command.github_url);
        update.demo_url = blank_to_none(command.demo_url);
        update.tech_stack = command.tech_stack;
        update.lessons_learned = blank_to_none(command.lessons_learned);
        update.thumbnail_url = blank_to_none(command.thumbnail_url);

        let updated = self.projects.update(update).await?;
        Ok(updated.into())
    }

    /// Store a thumbnail image. With a project id the caller must own the
    /// project, its previous thumbnail is discarded and the project is
    /// pointed at the new one.
    pub async fn upload_thumbnail(
        &self,
        actor: &AuthenticatedUser,
        command: UploadThumbnailCommand,
    ) -> ApplicationResult<ThumbnailDto> {
        let file = THUMBNAIL_POLICY.check(command.file)?;
        let project_id = command
            .project_id
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.parse::<ProjectId>())
            .transpose()?;

        let prefix = project_id.map(|id| format!("{id}-")).unwrap_or_default();
        let path = format!(
            "thumbnails/{}/{prefix}{}.{}",
            actor.id,
            self.clock.now_millis(),
            file.extension()
        );

        if let Some(id) = project_id {
            let project = self.owned_project(actor, id).await?;
            discard_previous(
                &self.storage,
                THUMBNAIL_BUCKET,
                project.thumbnail_url.as_deref(),
            )
            .await;
        }

        self.storage
            .upload(THUMBNAIL_BUCKET, &path, &file.content_type, file.data)
            .await?;
        let thumbnail_url = self.storage.public_url(THUMBNAIL_BUCKET, &path);

        if let Some(id) = project_id {
            self.projects.set_thumbnail_url(id, &thumbnail_url).await?;
        }

        Ok(ThumbnailDto { thumbnail_url })
    }

    async fn owned_project(
        &self,
        actor: &AuthenticatedUser,
        id: ProjectId,
    ) -> ApplicationResult<Project> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Project not found"))?;

        let profile = self
            .profiles
            .find_by_id(project.profile_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Profile not found"))?;

        if !profile.is_owned_by(actor.id) {
            tracing::warn!(user_id = %actor.id, project_id = %id, "project ownership check failed");
            return Err(ApplicationError::unauthorized("Unauthorized"));
        }

        Ok(project)
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
