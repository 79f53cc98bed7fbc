pub mod entity;
pub mod repository;

pub use entity::{
    COMMENT_NOTIFICATION, FALLBACK_ACTOR_NAME, NewNotification, Notification, NotificationContext,
    NotificationId,
};
pub use repository::NotificationRepository;
