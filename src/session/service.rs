use std::fmt;

use async_trait::async_trait;

use super::SessionView;

/// Errors that can occur talking to the session backend.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum SessionError {
    /// Backend misconfigured (missing token, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Backend returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the backend's response. Not retryable.
    Parse(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(msg) => write!(f, "config error: {msg}"),
            SessionError::Network(msg) => write!(f, "network error: {msg}"),
            SessionError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SessionError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// The session backend seam.
///
/// `sign_out` is the only fallible mutator the shell invokes. Callers treat
/// it as fire-and-forget: the drawer closes before the future resolves, and a
/// failure is logged rather than surfaced.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Fetch the current cart/auth snapshot.
    async fn fetch_session(&self) -> Result<SessionView, SessionError>;

    /// Invalidate the current session on the backend.
    async fn sign_out(&self) -> Result<(), SessionError>;
}

/// Backend-less session service: empty cart, signed out, sign-out is a no-op.
/// Used by `--offline` runs and by rendering tests.
pub struct OfflineSessionService;

#[async_trait]
impl SessionService for OfflineSessionService {
    fn name(&self) -> &str {
        "offline"
    }

    async fn fetch_session(&self) -> Result<SessionView, SessionError> {
        Ok(SessionView::default())
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::Api {
            status: 401,
            message: "token expired".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 401): token expired");

        let err = SessionError::Network("connection refused".to_string());
        assert!(err.to_string().starts_with("network error"));
    }

    #[test]
    fn test_offline_service_is_signed_out() {
        let service = OfflineSessionService;
        let view = tokio_test::block_on(service.fetch_session()).unwrap();
        assert!(!view.is_authenticated());
        assert_eq!(view.cart_count, 0);
        assert!(tokio_test::block_on(service.sign_out()).is_ok());
    }
}
