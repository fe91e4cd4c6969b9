use crate::models::errors::PushError;
use crate::services::identity_service::CallerAuthenticator;

/// Verifies the caller's bearer token and runs the action with the
/// authenticated user id. This keeps authentication enforcement uniform
/// across endpoints; every verification failure collapses to the one
/// generic Unauthorized outcome.
pub async fn with_valid_user<F, Fut, R>(
    authenticator: &dyn CallerAuthenticator,
    token: &str,
    action: F,
) -> Result<R, PushError>
where
    F: FnOnce(String) -> Fut,
    Fut: std::future::Future<Output = Result<R, PushError>>,
{
    match authenticator.verify(token).await {
        Ok(user_id) => action(user_id).await,
        Err(e) => {
            log::warn!("Caller verification failed: {}", e);
            Err(PushError::Unauthorized)
        }
    }
}
