use http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the push dispatch pipeline.
///
/// Everything here is fatal for the request except `Delivery`, which is
/// recorded per device token and absorbed into the dispatch summary.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("Missing configuration: {0}")]
    Configuration(String),

    // One generic message on purpose: callers must not learn which
    // verification step rejected them.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Assertion signing failed: {0}")]
    Crypto(String),

    #[error("Failed to get access token: {status} {body}")]
    TokenExchange { status: u16, body: String },

    #[error("Failed to fetch tokens: {0}")]
    TokenLookup(String),

    #[error("Push send failed: {0}")]
    Delivery(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl PushError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PushError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            PushError::Unauthorized => StatusCode::UNAUTHORIZED,
            PushError::Validation(_) => StatusCode::BAD_REQUEST,
            PushError::Crypto(_)
            | PushError::TokenExchange { .. }
            | PushError::TokenLookup(_)
            | PushError::Delivery(_)
            | PushError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_message_is_generic() {
        assert_eq!(PushError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn status_codes_follow_category() {
        assert_eq!(
            PushError::Configuration("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(PushError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            PushError::Validation("body is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PushError::TokenExchange { status: 400, body: "invalid_grant".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PushError::Crypto("bad key".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
