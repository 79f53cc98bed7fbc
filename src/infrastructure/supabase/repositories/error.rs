use crate::domain::errors::DomainError;
use crate::infrastructure::supabase::client::RemoteError;

const CNT_PROFILE_USERNAME: &str = "profiles_username_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";

/// Translate a failed PostgREST call into a domain error, using the Postgres
/// error code it forwards.
pub fn map_remote(err: RemoteError) -> DomainError {
    if let RemoteError::Status {
        code: Some(code),
        message,
        ..
    } = &err
    {
        if message.contains(CNT_PROFILE_USERNAME) {
            return DomainError::Conflict("Username is already taken".into());
        }
        if message.contains(CNT_PRODUCT_SLUG) {
            return DomainError::Conflict("slug already exists".into());
        }

        match code.as_str() {
            "23505" => return DomainError::Conflict(message.clone()),
            "23503" => return DomainError::NotFound("referenced record not found".into()),
            "23514" | "22P02" => return DomainError::Validation(message.clone()),
            _ => {}
        }
    }

    DomainError::Persistence(err.message())
}
