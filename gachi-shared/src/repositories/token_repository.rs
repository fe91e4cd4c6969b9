use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::models::errors::PushError;

/// Interface
#[async_trait]
pub trait PushTokenRepository: Send + Sync {
    /// All device tokens registered to the user. An empty list is a valid
    /// answer, distinct from a lookup failure.
    async fn tokens_for_user(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<Vec<String>, PushError>;
}

#[derive(Deserialize)]
struct TokenRow {
    token: String,
}

/// Supabase REST backed implementation. The caller's own bearer token is
/// forwarded so row-level security scopes the query to their rows.
pub struct SupabaseTokenRepository {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseTokenRepository {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }
}

#[async_trait]
impl PushTokenRepository for SupabaseTokenRepository {
    async fn tokens_for_user(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<Vec<String>, PushError> {
        let url = format!("{}/rest/v1/user_push_tokens", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("select", "token"), ("user_id", &format!("eq.{}", user_id))])
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| PushError::TokenLookup(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::TokenLookup(format!("{} {}", status, body)));
        }

        let rows: Vec<TokenRow> = response
            .json()
            .await
            .map_err(|e| PushError::TokenLookup(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| row.token)
            .filter(|token| !token.trim().is_empty())
            .collect())
    }
}
