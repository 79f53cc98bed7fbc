// tests/support/builders.rs
use builders_api::domain::comment::CommentId;
use builders_api::domain::notification::{
    COMMENT_NOTIFICATION, Notification, NotificationContext, NotificationId,
};
use builders_api::domain::profile::{Profile, ProfileId};
use builders_api::domain::project::{Project, ProjectId};
use builders_api::domain::user::UserId;
use uuid::Uuid;

use super::mocks::fixed_now;

pub struct ProfileBuilder {
    user_id: Uuid,
    username: Option<String>,
    avatar_url: Option<String>,
}

impl ProfileBuilder {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            username: None,
            avatar_url: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn build(self) -> Profile {
        Profile {
            id: ProfileId(self.user_id),
            user_id: Some(UserId(self.user_id)),
            username: self.username,
            full_name: Some("Test Builder".into()),
            bio: None,
            avatar_url: self.avatar_url,
        }
    }
}

pub struct ProjectBuilder {
    id: i64,
    owner: Uuid,
    title: String,
    slug: Option<String>,
    thumbnail_url: Option<String>,
}

impl ProjectBuilder {
    pub fn new(id: i64, owner: Uuid) -> Self {
        Self {
            id,
            owner,
            title: "Test Project".into(),
            slug: Some("test-project".into()),
            thumbnail_url: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn build(self) -> Project {
        Project {
            id: ProjectId::new(self.id).unwrap(),
            profile_id: ProfileId(self.owner),
            title: self.title,
            slug: self.slug,
            description: Some("A thing we built".into()),
            status: Some("in_progress".into()),
            github_url: Some("https://github.com/example/project".into()),
            demo_url: None,
            tech_stack: vec!["rust".into()],
            lessons_learned: None,
            thumbnail_url: self.thumbnail_url,
            created_at: Some(fixed_now()),
        }
    }
}

pub fn comment_notification(id: i64, user_id: Uuid, is_read: bool) -> Notification {
    Notification {
        id: NotificationId(id),
        user_id: UserId(user_id),
        comment_id: Some(CommentId(id * 10)),
        kind: COMMENT_NOTIFICATION.into(),
        is_read,
        created_at: fixed_now() + chrono::Duration::minutes(id),
        context: NotificationContext {
            actor_name: None,
            actor_avatar_url: None,
            project_title: Some("Test Project".into()),
            project_slug: Some("test-project".into()),
        },
    }
}
