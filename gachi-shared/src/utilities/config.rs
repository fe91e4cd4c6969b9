use dotenv::dotenv;
use std::env;

use crate::models::errors::PushError;
use crate::models::notifications::ServiceAccountKey;

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    }
}

fn require_env(key: &str) -> Result<String, PushError> {
    env::var(key).map_err(|_| PushError::Configuration(format!("Missing env: {}", key)))
}

/// Supabase project base URL, without trailing slashes.
pub fn get_supabase_url() -> Result<String, PushError> {
    Ok(require_env("SUPABASE_URL")?.trim_end_matches('/').to_string())
}

/// Public (anon) API key for the Supabase project.
pub fn get_supabase_anon_key() -> Result<String, PushError> {
    require_env("SUPABASE_ANON_KEY")
}

/// Firebase service account material: either one JSON blob or three
/// discrete fields. Nothing is logged here, the private key included.
pub fn get_service_account() -> Result<ServiceAccountKey, PushError> {
    if let Ok(raw) = env::var("FIREBASE_SERVICE_ACCOUNT_JSON") {
        return serde_json::from_str(&raw)
            .map_err(|e| PushError::Configuration(format!("Invalid service account JSON: {}", e)));
    }

    Ok(ServiceAccountKey {
        project_id: require_env("FIREBASE_PROJECT_ID")?,
        client_email: require_env("FIREBASE_CLIENT_EMAIL")?,
        private_key: require_env("FIREBASE_PRIVATE_KEY")?,
    })
}
