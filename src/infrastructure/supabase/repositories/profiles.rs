use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{execute, fetch};
use crate::domain::errors::DomainResult;
use crate::domain::profile::{
    Profile, ProfileId, ProfileRepository, ProfileUpdate, SocialLink, Username, UsernameClaim,
};
use crate::domain::user::UserId;
use crate::infrastructure::supabase::{
    client::SupabaseClient,
    postgrest::{Query, merging, table_request},
};

const PROFILES: &str = "profiles";
const SOCIAL_LINKS: &str = "social_links";
const PROFILE_COLUMNS: &str = "id, user_id, username, full_name, bio, avatar_url";

pub struct SupabaseProfileRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseProfileRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    async fn find_one(&self, query: Query) -> DomainResult<Option<Profile>> {
        let query = query.select(PROFILE_COLUMNS).limit(1);
        let rows: Vec<ProfileRow> =
            fetch(table_request(&self.client, Method::GET, PROFILES, &query)).await?;
        Ok(rows.into_iter().next().map(Into::into))
    }
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: Uuid,
    #[serde(default)]
    user_id: Option<Uuid>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: ProfileId(row.id),
            user_id: row.user_id.map(UserId),
            username: row.username,
            full_name: row.full_name,
            bio: row.bio,
            avatar_url: row.avatar_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct SocialLinkRow<'a> {
    user_id: Uuid,
    platform: &'a str,
    url: &'a str,
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        self.find_one(Query::new().eq("id", id)).await
    }

    async fn find_by_user_id(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        self.find_one(Query::new().eq("user_id", user_id)).await
    }

    async fn username_taken(
        &self,
        username: &Username,
        except: Option<UserId>,
    ) -> DomainResult<bool> {
        let mut query = Query::new().select("id").eq("username", username);
        if let Some(user_id) = except {
            query = query.neq("user_id", user_id);
        }
        let query = query.limit(1);

        let rows: Vec<serde_json::Value> =
            fetch(table_request(&self.client, Method::GET, PROFILES, &query)).await?;
        Ok(!rows.is_empty())
    }

    async fn upsert_for_user(&self, update: &ProfileUpdate) -> DomainResult<()> {
        let query = Query::new().on_conflict("user_id");
        let body = json!({
            "username": update.username.as_str(),
            "full_name": update.full_name,
            "bio": update.bio,
            "avatar_url": update.avatar_url,
            "user_id": update.user_id,
        });

        let request = table_request(&self.client, Method::POST, PROFILES, &query)
            .map(|r| merging(r).json(&body));
        execute(request).await
    }

    async fn claim_username(&self, claim: UsernameClaim) -> DomainResult<()> {
        let query = Query::new().on_conflict("id");
        let body = json!({
            "id": claim.profile_id,
            "username": claim.username.as_str(),
            "updated_at": claim.updated_at,
        });

        let request = table_request(&self.client, Method::POST, PROFILES, &query)
            .map(|r| merging(r).json(&body));
        execute(request).await
    }

    async fn set_avatar_url(&self, user_id: UserId, url: &str) -> DomainResult<()> {
        let query = Query::new().eq("user_id", user_id);
        let request = table_request(&self.client, Method::PATCH, PROFILES, &query)
            .map(|r| r.json(&json!({ "avatar_url": url })));
        execute(request).await
    }

    async fn replace_social_links(
        &self,
        user_id: UserId,
        links: &[SocialLink],
    ) -> DomainResult<()> {
        let query = Query::new().eq("user_id", user_id);
        execute(table_request(&self.client, Method::DELETE, SOCIAL_LINKS, &query)).await?;

        if links.is_empty() {
            return Ok(());
        }

        let rows: Vec<SocialLinkRow<'_>> = links
            .iter()
            .map(|link| SocialLinkRow {
                user_id: user_id.0,
                platform: &link.platform,
                url: &link.url,
            })
            .collect();
        let request = table_request(&self.client, Method::POST, SOCIAL_LINKS, &Query::new())
            .map(|r| r.json(&rows));
        execute(request).await
    }
}
