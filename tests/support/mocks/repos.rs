// tests/support/mocks/repos.rs
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use builders_api::domain::{
    comment::{Comment, CommentEdit, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    notification::{NewNotification, Notification, NotificationId, NotificationRepository},
    profile::{
        Profile, ProfileId, ProfileRepository, ProfileUpdate, SocialLink, Username, UsernameClaim,
    },
    project::{Project, ProjectId, ProjectRepository, ProjectUpdate},
    user::UserId,
};

use super::time::fixed_now;

/* -------------------------------- プロフィール -------------------------------- */

#[derive(Default)]
pub struct InMemoryProfiles {
    pub profiles: Mutex<Vec<Profile>>,
    pub links: Mutex<Vec<(UserId, SocialLink)>>,
    fail_user_lookups: bool,
}

impl InMemoryProfiles {
    pub fn with(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            ..Self::default()
        }
    }

    /// user_id での検索だけが失敗する
    pub fn with_failing_user_lookup(profiles: Vec<Profile>) -> Self {
        Self {
            fail_user_lookups: true,
            ..Self::with(profiles)
        }
    }

    pub fn by_user(&self, user_id: UserId) -> Option<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == Some(user_id))
            .cloned()
    }

    pub fn links_of(&self, user_id: UserId) -> Vec<SocialLink> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, link)| link.clone())
            .collect()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        if self.fail_user_lookups {
            return Err(DomainError::Persistence("profiles table unavailable".into()));
        }
        Ok(self.by_user(user_id))
    }

    async fn username_taken(
        &self,
        username: &Username,
        except: Option<UserId>,
    ) -> DomainResult<bool> {
        Ok(self.profiles.lock().unwrap().iter().any(|p| {
            p.username.as_deref() == Some(username.as_str())
                && (except.is_none() || p.user_id != except)
        }))
    }

    async fn upsert_for_user(&self, update: &ProfileUpdate) -> DomainResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        let username = Some(update.username.as_str().to_string());
        match profiles
            .iter_mut()
            .find(|p| p.user_id == Some(update.user_id))
        {
            Some(profile) => {
                profile.username = username;
                profile.full_name = update.full_name.clone();
                profile.bio = update.bio.clone();
                profile.avatar_url = update.avatar_url.clone();
            }
            None => profiles.push(Profile {
                id: ProfileId::from(update.user_id),
                user_id: Some(update.user_id),
                username,
                full_name: update.full_name.clone(),
                bio: update.bio.clone(),
                avatar_url: update.avatar_url.clone(),
            }),
        }
        Ok(())
    }

    async fn claim_username(&self, claim: UsernameClaim) -> DomainResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        let username = Some(claim.username.as_str().to_string());
        match profiles.iter_mut().find(|p| p.id == claim.profile_id) {
            Some(profile) => profile.username = username,
            None => profiles.push(Profile {
                id: claim.profile_id,
                user_id: Some(UserId(claim.profile_id.0)),
                username,
                full_name: None,
                bio: None,
                avatar_url: None,
            }),
        }
        Ok(())
    }

    async fn set_avatar_url(&self, user_id: UserId, url: &str) -> DomainResult<()> {
        if let Some(profile) = self
            .profiles
            .lock()
            .unwrap()
            .iter_mut()
            .find(|p| p.user_id == Some(user_id))
        {
            profile.avatar_url = Some(url.to_string());
        }
        Ok(())
    }

    async fn replace_social_links(
        &self,
        user_id: UserId,
        links: &[SocialLink],
    ) -> DomainResult<()> {
        let mut stored = self.links.lock().unwrap();
        stored.retain(|(owner, _)| *owner != user_id);
        stored.extend(links.iter().cloned().map(|link| (user_id, link)));
        Ok(())
    }
}

/* -------------------------------- プロジェクト -------------------------------- */

#[derive(Default)]
pub struct InMemoryProjects {
    pub projects: Mutex<Vec<Project>>,
}

impl InMemoryProjects {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
        }
    }

    pub fn get(&self, id: i64) -> Option<Project> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.0 == id)
            .cloned()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        Ok(self.get(id.0))
    }

    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: ProjectId,
    ) -> DomainResult<Vec<String>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.id != exclude)
            .filter_map(|p| p.slug.clone())
            .filter(|slug| slug.starts_with(prefix))
            .collect())
    }

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("project not found".into()))?;

        if let Some(title) = update.title {
            project.title = title.into_inner();
        }
        if let Some(slug) = update.slug {
            project.slug = Some(slug.into_inner());
        }
        if update.description.is_some() {
            project.description = update.description;
        }
        if update.status.is_some() {
            project.status = update.status;
        }
        project.github_url = update.github_url;
        project.demo_url = update.demo_url;
        project.tech_stack = update.tech_stack;
        project.lessons_learned = update.lessons_learned;
        project.thumbnail_url = update.thumbnail_url;

        Ok(project.clone())
    }

    async fn set_thumbnail_url(&self, id: ProjectId, url: &str) -> DomainResult<()> {
        if let Some(project) = self
            .projects
            .lock()
            .unwrap()
            .iter_mut()
            .find(|p| p.id == id)
        {
            project.thumbnail_url = Some(url.to_string());
        }
        Ok(())
    }
}

/* -------------------------------- コメント -------------------------------- */

pub struct InMemoryComments {
    pub comments: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl Default for InMemoryComments {
    fn default() -> Self {
        Self {
            comments: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryComments {
    pub fn all(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn list_for_project(&self, product_id: ProjectId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.product_id == product_id)
            .cloned()
            .collect();
        // 新しい順
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = CommentId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = Comment {
            id,
            product_id: comment.product_id,
            profile_id: comment.profile_id,
            content: comment.content.into(),
            created_at: fixed_now(),
            updated_at: None,
            author: None,
        };
        self.comments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update_owned(&self, edit: CommentEdit) -> DomainResult<Option<Comment>> {
        let mut comments = self.comments.lock().unwrap();
        Ok(comments
            .iter_mut()
            .find(|c| c.id == edit.id && c.profile_id == edit.author)
            .map(|comment| {
                comment.content = edit.content.into();
                comment.updated_at = Some(edit.updated_at);
                comment.clone()
            }))
    }

    async fn delete_owned(&self, id: CommentId, author: ProfileId) -> DomainResult<()> {
        self.comments
            .lock()
            .unwrap()
            .retain(|c| !(c.id == id && c.profile_id == author));
        Ok(())
    }
}

/* -------------------------------- 通知 -------------------------------- */

pub struct InMemoryNotifications {
    pub items: Mutex<Vec<Notification>>,
    next_id: AtomicI64,
    /// true の場合 insert は失敗する
    pub fail_inserts: bool,
}

impl Default for InMemoryNotifications {
    fn default() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_inserts: false,
        }
    }
}

impl InMemoryNotifications {
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn with(items: Vec<Notification>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<Notification> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn insert(&self, notification: NewNotification) -> DomainResult<()> {
        if self.fail_inserts {
            return Err(DomainError::Persistence("notifications table unavailable".into()));
        }
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.items.lock().unwrap().push(Notification {
            id,
            user_id: notification.user_id,
            comment_id: Some(notification.comment_id),
            kind: notification.kind.to_string(),
            is_read: false,
            created_at: fixed_now(),
            context: Default::default(),
        });
        Ok(())
    }

    async fn list_recent(&self, user_id: UserId, limit: u32) -> DomainResult<Vec<Notification>> {
        let mut items: Vec<Notification> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        items.truncate(limit as usize);
        Ok(items)
    }

    async fn mark_all_read(&self, user_id: UserId) -> DomainResult<()> {
        for item in self
            .items
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            item.is_read = true;
        }
        Ok(())
    }
}
