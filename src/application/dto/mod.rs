pub mod auth;
pub mod comments;
pub mod notifications;
pub mod profiles;
pub mod projects;

pub use auth::{
    AuthenticatedUser, CurrentUserDto, JoinedMemberDto, SessionCredentials, SessionUserDto,
    VerificationDto,
};
pub use comments::{CommentAuthorDto, CommentDto};
pub use notifications::{NotificationDto, NotificationListDto};
pub use profiles::{AvatarDto, ClaimedUsernameDto};
pub use projects::{ProjectDto, ThumbnailDto};
