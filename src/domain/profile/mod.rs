pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Profile, ProfileUpdate, UsernameClaim};
pub use repository::ProfileRepository;
pub use value_objects::{ProfileId, SocialLink, Username};
