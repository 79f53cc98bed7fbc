//! Adapters for the hosted Supabase project: GoTrue auth, PostgREST tables
//! and Storage buckets.

pub mod auth;
pub mod client;
pub mod postgrest;
pub mod repositories;
pub mod storage;

pub use auth::SupabaseIdentityProvider;
pub use client::{RemoteError, SupabaseClient};
pub use repositories::{
    SupabaseCommentRepository, SupabaseNotificationRepository, SupabaseProfileRepository,
    SupabaseProjectRepository,
};
pub use storage::SupabaseStorage;
