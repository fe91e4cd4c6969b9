use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::models::errors::PushError;

/// First hop of the trust chain: establishes who the caller is from their
/// bearer token. The user id returned here is the only identity the rest of
/// the pipeline trusts.
#[async_trait]
pub trait CallerAuthenticator: Send + Sync {
    async fn verify(&self, access_token: &str) -> Result<String, PushError>;
}

#[derive(Deserialize)]
struct AuthUser {
    id: String,
}

/// Supabase Auth backed implementation: forwards the caller's token to
/// `/auth/v1/user` and trusts the id the auth service hands back.
pub struct SupabaseAuthenticator {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuthenticator {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }
}

#[async_trait]
impl CallerAuthenticator for SupabaseAuthenticator {
    async fn verify(&self, access_token: &str) -> Result<String, PushError> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Auth service unreachable: {}", e);
                PushError::Unauthorized
            })?;

        if !response.status().is_success() {
            log::warn!("Auth service rejected token with {}", response.status());
            return Err(PushError::Unauthorized);
        }

        let user: AuthUser = response.json().await.map_err(|e| {
            log::warn!("Unparseable auth service response: {}", e);
            PushError::Unauthorized
        })?;

        if user.id.is_empty() {
            return Err(PushError::Unauthorized);
        }

        Ok(user.id)
    }
}
