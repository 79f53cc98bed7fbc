pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use entity::{Project, ProjectUpdate};
pub use repository::ProjectRepository;
pub use slug::{generate_slug, make_unique};
pub use value_objects::{ProjectId, ProjectSlug, ProjectTitle};
