pub mod comment;
pub mod errors;
pub mod notification;
pub mod profile;
pub mod project;
pub mod user;
