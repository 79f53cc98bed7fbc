use super::entity::{Profile, ProfileUpdate, UsernameClaim};
use super::value_objects::{ProfileId, SocialLink, Username};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>>;

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Profile>>;

    /// Whether another profile already holds `username`. Profiles owned by
    /// `except` are ignored.
    async fn username_taken(&self, username: &Username, except: Option<UserId>)
    -> DomainResult<bool>;

    async fn upsert_for_user(&self, update: &ProfileUpdate) -> DomainResult<()>;

    async fn claim_username(&self, claim: UsernameClaim) -> DomainResult<()>;

    async fn set_avatar_url(&self, user_id: UserId, url: &str) -> DomainResult<()>;

    /// Delete every link of `user_id`, then insert `links`. The two writes
    /// are separate calls; a failed insert leaves the user without links.
    async fn replace_social_links(&self, user_id: UserId, links: &[SocialLink])
    -> DomainResult<()>;
}
