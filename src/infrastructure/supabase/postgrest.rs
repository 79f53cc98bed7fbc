//! Query-string builder for PostgREST table endpoints.

use std::fmt::Display;

use reqwest::{Method, RequestBuilder};

use super::client::{ApiKey, RemoteError, SupabaseClient};

const PREFER: &str = "Prefer";
pub const RETURN_REPRESENTATION: &str = "return=representation";
pub const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=minimal";

/// Filters and modifiers for one table request, in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(self, columns: &str) -> Self {
        self.param("select", compact(columns))
    }

    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.param(column, format!("eq.{value}"))
    }

    pub fn neq(self, column: &str, value: impl Display) -> Self {
        self.param(column, format!("neq.{value}"))
    }

    /// `*` in `pattern` matches any run of characters.
    pub fn like(self, column: &str, pattern: &str) -> Self {
        self.param(column, format!("like.{pattern}"))
    }

    pub fn order(self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.param("order", format!("{column}.{direction}"))
    }

    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit.to_string())
    }

    pub fn on_conflict(self, columns: &str) -> Self {
        self.param("on_conflict", columns.to_string())
    }

    fn param(mut self, key: &str, value: String) -> Self {
        self.params.push((key.to_string(), value));
        self
    }

    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }
}

/// Embedded selects are written over several lines for readability; the
/// wire form has no whitespace.
fn compact(columns: &str) -> String {
    columns.split_whitespace().collect()
}

/// Request against `/rest/v1/{table}` signed with the service role key.
pub fn table_request(
    client: &SupabaseClient,
    method: Method,
    table: &str,
    query: &Query,
) -> Result<RequestBuilder, RemoteError> {
    let mut url = client.endpoint(&format!("rest/v1/{table}"))?;
    let encoded = query.encode();
    if !encoded.is_empty() {
        url.set_query(Some(&encoded));
    }
    Ok(client.request(method, url, ApiKey::ServiceRole))
}

/// Ask PostgREST to answer a write with the affected rows.
pub fn returning(request: RequestBuilder) -> RequestBuilder {
    request.header(PREFER, RETURN_REPRESENTATION)
}

/// Upsert semantics for an insert carrying `on_conflict`.
pub fn merging(request: RequestBuilder) -> RequestBuilder {
    request.header(PREFER, MERGE_DUPLICATES)
}
