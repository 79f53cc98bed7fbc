mod comments;
mod error;
mod notifications;
mod profiles;
mod projects;

pub use comments::SupabaseCommentRepository;
pub use error::map_remote;
pub use notifications::SupabaseNotificationRepository;
pub use profiles::SupabaseProfileRepository;
pub use projects::SupabaseProjectRepository;

use crate::domain::errors::DomainResult;
use crate::infrastructure::supabase::client::{RemoteError, send_empty, send_json};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

async fn fetch<T: DeserializeOwned>(request: Result<RequestBuilder, RemoteError>) -> DomainResult<T> {
    send_json(request.map_err(map_remote)?).await.map_err(map_remote)
}

async fn execute(request: Result<RequestBuilder, RemoteError>) -> DomainResult<()> {
    send_empty(request.map_err(map_remote)?).await.map_err(map_remote)
}
