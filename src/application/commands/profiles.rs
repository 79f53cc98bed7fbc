use std::sync::Arc;

use super::uploads::{AVATAR_POLICY, UploadedFile, discard_previous};
use crate::{
    application::{
        dto::{AuthenticatedUser, AvatarDto, ClaimedUsernameDto},
        error::{ApplicationError, ApplicationResult},
        ports::{
            storage::{AVATAR_BUCKET, ObjectStorage},
            time::Clock,
        },
    },
    domain::profile::{ProfileRepository, ProfileUpdate, SocialLink, Username, UsernameClaim},
};

const USERNAME_TAKEN: &str = "Username is already taken";

#[derive(Debug, Clone)]
pub struct SocialLinkInput {
    pub platform: String,
    pub url: String,
}

pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub social_links: Option<Vec<SocialLinkInput>>,
}

pub struct ClaimUsernameCommand {
    pub username: Option<String>,
}

pub struct UploadAvatarCommand {
    pub file: Option<UploadedFile>,
}

pub struct ProfileCommandService {
    profiles: Arc<dyn ProfileRepository>,
    storage: Arc<dyn ObjectStorage>,
    clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        storage: Arc<dyn ObjectStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profiles,
            storage,
            clock,
        }
    }

    /// Upsert the actor's profile. Social links are replaced only when a
    /// non-empty list is supplied.
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<()> {
        let username = Username::new(command.username.unwrap_or_default())?;
        let links = command
            .social_links
            .unwrap_or_default()
            .into_iter()
            .map(|link| SocialLink::new(link.platform, link.url))
            .collect::<Result<Vec<_>, _>>()?;

        if self
            .profiles
            .username_taken(&username, Some(actor.id))
            .await?
        {
            return Err(ApplicationError::conflict(USERNAME_TAKEN));
        }

        self.profiles
            .upsert_for_user(&ProfileUpdate {
                user_id: actor.id,
                username,
                full_name: command.full_name,
                bio: command.bio,
                avatar_url: command.avatar_url,
            })
            .await?;

        if !links.is_empty() {
            self.profiles.replace_social_links(actor.id, &links).await?;
        }

        Ok(())
    }

    pub async fn claim_username(
        &self,
        actor: &AuthenticatedUser,
        command: ClaimUsernameCommand,
    ) -> ApplicationResult<ClaimedUsernameDto> {
        let username = Username::new(command.username.unwrap_or_default())?;

        if self.profiles.username_taken(&username, None).await? {
            return Err(ApplicationError::conflict(USERNAME_TAKEN));
        }

        self.profiles
            .claim_username(UsernameClaim {
                profile_id: actor.profile_id(),
                username: username.clone(),
                updated_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user_id = %actor.id, username = %username, "username claimed");
        Ok(ClaimedUsernameDto {
            username: username.into(),
        })
    }

    /// Store a new avatar image and point the profile at it. The previous
    /// avatar object is removed on a best-effort basis.
    pub async fn upload_avatar(
        &self,
        actor: &AuthenticatedUser,
        command: UploadAvatarCommand,
    ) -> ApplicationResult<AvatarDto> {
        let file = AVATAR_POLICY.check(command.file)?;
        let path = format!(
            "avatars/{}/{}.{}",
            actor.id,
            self.clock.now_millis(),
            file.extension()
        );

        let previous = match self.profiles.find_by_user_id(actor.id).await {
            Ok(profile) => profile.and_then(|p| p.avatar_url),
            Err(err) => {
                tracing::warn!(error = %err, user_id = %actor.id, "previous avatar lookup failed");
                None
            }
        };
        discard_previous(&self.storage, AVATAR_BUCKET, previous.as_deref()).await;

        self.storage
            .upload(AVATAR_BUCKET, &path, &file.content_type, file.data)
            .await?;
        let avatar_url = self.storage.public_url(AVATAR_BUCKET, &path);

        self.profiles.set_avatar_url(actor.id, &avatar_url).await?;

        Ok(AvatarDto { avatar_url })
    }
}
