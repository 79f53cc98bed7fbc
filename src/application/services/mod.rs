pub mod session;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            AuthCommandService, CommentCommandService, NotificationCommandService,
            ProfileCommandService, ProjectCommandService,
        },
        ports::{
            identity::IdentityProvider, storage::ObjectStorage, time::Clock,
            util::SlugGenerator, workspace::WorkspaceDirectory,
        },
        queries::{CommentQueryService, NotificationQueryService},
    },
    domain::{
        comment::CommentRepository, notification::NotificationRepository,
        profile::ProfileRepository,
        project::{ProjectRepository, services::ProjectSlugService},
    },
};

pub use session::{ACCESS_TOKEN_COOKIE, CookieSource, REFRESH_TOKEN_COOKIE, SessionGate};

pub struct ApplicationServices {
    pub session_gate: Arc<SessionGate>,
    pub auth_commands: Arc<AuthCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub notification_commands: Arc<NotificationCommandService>,
    pub notification_queries: Arc<NotificationQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub project_commands: Arc<ProjectCommandService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        workspace: Arc<dyn WorkspaceDirectory>,
        storage: Arc<dyn ObjectStorage>,
        profile_repo: Arc<dyn ProfileRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        auth_redirect_url: impl Into<String>,
    ) -> Self {
        let session_gate = Arc::new(SessionGate::new(Arc::clone(&identity)));

        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&identity),
            Arc::clone(&workspace),
            auth_redirect_url,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&notification_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        let notification_commands = Arc::new(NotificationCommandService::new(Arc::clone(
            &notification_repo,
        )));
        let notification_queries =
            Arc::new(NotificationQueryService::new(Arc::clone(&notification_repo)));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&storage),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ProjectSlugService::new(
            Arc::clone(&project_repo),
            Arc::clone(&slugger),
        ));

        let project_commands = Arc::new(ProjectCommandService::new(
            Arc::clone(&project_repo),
            Arc::clone(&profile_repo),
            Arc::clone(&storage),
            slug_service,
            Arc::clone(&clock),
        ));

        Self {
            session_gate,
            auth_commands,
            comment_commands,
            comment_queries,
            notification_commands,
            notification_queries,
            profile_commands,
            project_commands,
        }
    }
}
