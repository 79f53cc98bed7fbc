pub mod comments;
pub mod notifications;

pub use comments::CommentQueryService;
pub use notifications::{NotificationQueryService, RECENT_NOTIFICATION_LIMIT};
