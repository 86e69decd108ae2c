//! Hosted datastore client — session lookup and row-level queries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application does not own storage. Lessons and subscriptions live in
//! a managed database/auth service; this client speaks its REST surface
//! (a PostgREST-style row API under `/rest/v1` and a GoTrue-style auth API
//! under `/auth/v1`). Every row request carries the anon `apikey` header
//! plus the caller's bearer token, so the provider's row-level security
//! decides visibility — anonymous callers fall back to the anon role.

use std::time::Duration;

use serde::Deserialize;
use uuid::Uuid;

use lessons::{Lesson, NewLesson, Subscription};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// PostgREST media type for exactly-one-row responses.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

// =============================================================================
// CONFIG
// =============================================================================

/// Connection settings for the hosted datastore.
#[derive(Debug, Clone)]
pub struct DatastoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl DatastoreConfig {
    /// Load from `DATASTORE_URL` and `DATASTORE_ANON_KEY`.
    /// Returns `None` if either is missing.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("DATASTORE_URL").ok()?;
        let anon_key = std::env::var("DATASTORE_ANON_KEY").ok()?;
        Some(Self { url: url.trim_end_matches('/').to_owned(), anon_key })
    }
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DatastoreError {
    /// The HTTP request itself failed.
    #[error("datastore request failed: {0}")]
    Request(String),

    /// The datastore returned a non-success HTTP status.
    #[error("datastore api error: status {status}")]
    Api { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("datastore response parse failed: {0}")]
    Decode(String),

    /// A single-row query matched nothing.
    #[error("row not found")]
    NotFound,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// AUTH TYPES
// =============================================================================

/// Authenticated user as reported by the auth API's session lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct AuthTokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    customer_id: String,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct Datastore {
    http: reqwest::Client,
    config: DatastoreConfig,
}

impl Datastore {
    pub fn new(config: DatastoreConfig) -> Result<Self, DatastoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| DatastoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.url)
    }

    fn rest_url(&self, query: &str) -> String {
        format!("{}/rest/v1/{query}", self.config.url)
    }

    /// Base request: anon `apikey` plus caller bearer token (anon key when
    /// there is no session).
    fn request(&self, method: reqwest::Method, url: String, token: Option<&str>) -> reqwest::RequestBuilder {
        let bearer = token.unwrap_or(&self.config.anon_key);
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    async fn execute(builder: reqwest::RequestBuilder) -> Result<(u16, String), DatastoreError> {
        let response = builder.send().await.map_err(|e| DatastoreError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DatastoreError::Request(e.to_string()))?;
        Ok((status, body))
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, DatastoreError> {
        serde_json::from_str(body).map_err(|e| DatastoreError::Decode(e.to_string()))
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Password sign-in. Returns the session's access token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, DatastoreError> {
        let url = self.auth_url("token?grant_type=password");
        let body = serde_json::json!({ "email": email, "password": password });
        let (status, text) = Self::execute(self.request(reqwest::Method::POST, url, None).json(&body)).await?;
        if status != 200 {
            return Err(DatastoreError::Api { status, body: text });
        }
        let token: AuthTokenResponse = Self::decode(&text)?;
        token
            .access_token
            .ok_or_else(|| DatastoreError::Decode("sign-in response missing access_token".into()))
    }

    /// Password sign-up. Returns the access token, or `None` when the
    /// provider requires email confirmation before issuing a session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<String>, DatastoreError> {
        let url = self.auth_url("signup");
        let body = serde_json::json!({ "email": email, "password": password });
        let (status, text) = Self::execute(self.request(reqwest::Method::POST, url, None).json(&body)).await?;
        if status != 200 {
            return Err(DatastoreError::Api { status, body: text });
        }
        let token: AuthTokenResponse = Self::decode(&text)?;
        Ok(token.access_token)
    }

    /// Session lookup. `Ok(None)` for expired or invalid tokens.
    pub async fn user(&self, token: &str) -> Result<Option<SessionUser>, DatastoreError> {
        let url = self.auth_url("user");
        let (status, text) = Self::execute(self.request(reqwest::Method::GET, url, Some(token))).await?;
        match status {
            200 => Ok(Some(Self::decode(&text)?)),
            401 | 403 => Ok(None),
            _ => Err(DatastoreError::Api { status, body: text }),
        }
    }

    /// Revoke the session behind `token`. Already-dead sessions are fine.
    pub async fn sign_out(&self, token: &str) -> Result<(), DatastoreError> {
        let url = self.auth_url("logout");
        let (status, text) = Self::execute(self.request(reqwest::Method::POST, url, Some(token))).await?;
        match status {
            200..=299 | 401 | 403 => Ok(()),
            _ => Err(DatastoreError::Api { status, body: text }),
        }
    }

    // =========================================================================
    // ROWS
    // =========================================================================

    /// All lessons visible to the caller, newest first.
    pub async fn list_lessons(&self, token: Option<&str>) -> Result<Vec<Lesson>, DatastoreError> {
        let url = self.rest_url("lessons?select=*&order=created_at.desc");
        let (status, text) = Self::execute(self.request(reqwest::Method::GET, url, token)).await?;
        if status != 200 {
            return Err(DatastoreError::Api { status, body: text });
        }
        Self::decode(&text)
    }

    /// The caller's own lessons, newest first.
    pub async fn lessons_for_user(&self, token: Option<&str>, user_id: Uuid) -> Result<Vec<Lesson>, DatastoreError> {
        let url = self.rest_url(&format!("lessons?select=*&user_id=eq.{user_id}&order=created_at.desc"));
        let (status, text) = Self::execute(self.request(reqwest::Method::GET, url, token)).await?;
        if status != 200 {
            return Err(DatastoreError::Api { status, body: text });
        }
        Self::decode(&text)
    }

    /// One lesson by id. `NotFound` when the row does not exist or is not
    /// visible to the caller.
    pub async fn lesson(&self, token: Option<&str>, id: Uuid) -> Result<Lesson, DatastoreError> {
        let url = self.rest_url(&format!("lessons?select=*&id=eq.{id}"));
        let builder = self
            .request(reqwest::Method::GET, url, token)
            .header("Accept", SINGLE_OBJECT);
        let (status, text) = Self::execute(builder).await?;
        match status {
            200 => Self::decode(&text),
            404 | 406 => Err(DatastoreError::NotFound),
            _ => Err(DatastoreError::Api { status, body: text }),
        }
    }

    /// Insert a lesson row and return it as stored.
    pub async fn insert_lesson(&self, token: Option<&str>, new: &NewLesson) -> Result<Lesson, DatastoreError> {
        let url = self.rest_url("lessons");
        let builder = self
            .request(reqwest::Method::POST, url, token)
            .header("Accept", SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(new);
        let (status, text) = Self::execute(builder).await?;
        match status {
            200 | 201 => Self::decode(&text),
            _ => Err(DatastoreError::Api { status, body: text }),
        }
    }

    /// The caller's subscription row, if one exists.
    pub async fn subscription_for_user(
        &self,
        token: Option<&str>,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, DatastoreError> {
        let url = self.rest_url(&format!(
            "subscriptions?select=*&user_id=eq.{user_id}&order=current_period_end.desc&limit=1"
        ));
        let (status, text) = Self::execute(self.request(reqwest::Method::GET, url, token)).await?;
        if status != 200 {
            return Err(DatastoreError::Api { status, body: text });
        }
        let rows: Vec<Subscription> = Self::decode(&text)?;
        Ok(rows.into_iter().next())
    }

    /// The caller's payment-customer id, if checkout has created one.
    pub async fn customer_id_for_user(
        &self,
        token: Option<&str>,
        user_id: Uuid,
    ) -> Result<Option<String>, DatastoreError> {
        let url = self.rest_url(&format!("customers?select=customer_id&user_id=eq.{user_id}&limit=1"));
        let (status, text) = Self::execute(self.request(reqwest::Method::GET, url, token)).await?;
        if status != 200 {
            return Err(DatastoreError::Api { status, body: text });
        }
        let rows: Vec<CustomerRow> = Self::decode(&text)?;
        Ok(rows.into_iter().next().map(|row| row.customer_id))
    }
}

#[cfg(test)]
#[path = "datastore_test.rs"]
mod tests;
