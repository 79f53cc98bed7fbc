pub mod auth;
pub mod comments;
pub mod notifications;
pub mod profiles;
pub mod projects;
pub mod uploads;

pub use auth::{
    AuthCommandService, ConfirmSessionCommand, JoinCommand, SignInCommand, SignInOutcome,
    VerifyEmailCommand,
};
pub use comments::{
    CommentCommandService, CreateCommentCommand, DeleteCommentCommand, EditCommentCommand,
};
pub use notifications::NotificationCommandService;
pub use profiles::{
    ClaimUsernameCommand, ProfileCommandService, SocialLinkInput, UpdateProfileCommand,
    UploadAvatarCommand,
};
pub use projects::{ProjectCommandService, UpdateProjectCommand, UploadThumbnailCommand};
pub use uploads::UploadedFile;
