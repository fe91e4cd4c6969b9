use std::sync::Arc;

use gachi_shared::models::errors::PushError;
use gachi_shared::models::notifications::{NotificationPayload, PushRequest};
use gachi_shared::repositories::token_repository::{PushTokenRepository, SupabaseTokenRepository};
use gachi_shared::services::identity_service::{CallerAuthenticator, SupabaseAuthenticator};
use gachi_shared::services::notification_services::{FcmSender, GoogleOauthMinter, PushDispatcher};
use gachi_shared::utilities::authentication::with_valid_user;
use gachi_shared::utilities::config;
use gachi_shared::utilities::requests::{extract_bearer_token, is_json};
use gachi_shared::utilities::responses::{error_response, response_with_code, success_response};
use http::StatusCode;
use lambda_http::{Body, Request, Response};
use serde_json::{json, Value};

/// Everything the dispatch pipeline talks to, injected so tests can swap in
/// fakes at each seam.
pub struct PushDependencies {
    pub authenticator: Box<dyn CallerAuthenticator>,
    pub tokens: Box<dyn PushTokenRepository>,
    pub dispatcher: PushDispatcher,
}

fn build_dependencies() -> Result<PushDependencies, PushError> {
    let supabase_url = config::get_supabase_url()?;
    let anon_key = config::get_supabase_anon_key()?;
    let account = config::get_service_account()?;
    let project_id = account.project_id.clone();

    Ok(PushDependencies {
        authenticator: Box::new(SupabaseAuthenticator::new(&supabase_url, &anon_key)),
        tokens: Box::new(SupabaseTokenRepository::new(&supabase_url, &anon_key)),
        dispatcher: PushDispatcher::new(
            Arc::new(GoogleOauthMinter::new(account)),
            Arc::new(FcmSender::new(&project_id)),
        ),
    })
}

pub async fn handler(event: Request, body: Value) -> Result<Response<Body>, lambda_http::Error> {
    let deps = match build_dependencies() {
        Ok(deps) => deps,
        Err(e) => {
            log::error!("Dispatch dependencies unavailable: {}", e);
            return error_response(&e);
        }
    };

    send_push(&event, body, &deps).await
}

pub async fn send_push(
    event: &Request,
    body: Value,
    deps: &PushDependencies,
) -> Result<Response<Body>, lambda_http::Error> {
    // The bearer token is checked before anything else touches the request;
    // without it no downstream service is contacted.
    let bearer = match extract_bearer_token(event) {
        Some(token) => token,
        None => return error_response(&PushError::Unauthorized),
    };

    if !is_json(event) {
        return response_with_code(
            "Bad Request: expected application/json",
            StatusCode::BAD_REQUEST,
        );
    }

    let request: PushRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => return error_response(&PushError::Validation(format!("Invalid request body: {}", e))),
    };

    let payload = match NotificationPayload::from_request(request) {
        Ok(payload) => payload,
        Err(e) => return error_response(&e),
    };

    let payload = &payload;
    let result = with_valid_user(deps.authenticator.as_ref(), bearer, |user_id| async move {
        let tokens = deps.tokens.tokens_for_user(&user_id, bearer).await?;

        if tokens.is_empty() {
            log::info!("No push tokens registered for caller, nothing to send");
            return Ok(json!({ "ok": true, "sent": 0, "reason": "no_tokens" }));
        }

        let summary = deps.dispatcher.dispatch(&tokens, payload).await?;
        log::info!("Dispatch finished: {} sent, {} failed", summary.sent, summary.failed);

        Ok(json!({ "ok": true, "sent": summary.sent, "failed": summary.failed }))
    })
    .await;

    match result {
        Ok(body) => success_response(body),
        Err(e) => error_response(&e),
    }
}
