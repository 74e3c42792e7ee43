//! HTTP session backend.
//!
//! Two endpoints:
//! - `GET  {base}/session`        → current [`SessionView`] as JSON
//! - `POST {base}/auth/sign-out`  → invalidates the session, empty body
//!
//! Requests carry a bearer token when one is configured. Sign-out also sends
//! an `X-Request-Id` UUID so overlapping fire-and-forget invocations can be
//! told apart in backend logs.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::{SessionError, SessionService, SessionView};

pub struct HttpSessionService {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpSessionService {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl SessionService for HttpSessionService {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_session(&self) -> Result<SessionView, SessionError> {
        let url = format!("{}/session", self.base_url);
        info!("Fetching session from {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        debug!("Session response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Session API error: {} - {}", status, err_body);
            return Err(SessionError::Api {
                status,
                message: err_body,
            });
        }

        let view: SessionView = response
            .json()
            .await
            .map_err(|e| SessionError::Parse(e.to_string()))?;

        info!(
            "Session loaded: cart_count={}, authenticated={}",
            view.cart_count,
            view.is_authenticated()
        );
        Ok(view)
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        let url = format!("{}/auth/sign-out", self.base_url);
        let request_id = uuid::Uuid::new_v4();
        info!("Signing out via {} (request_id={})", url, request_id);

        let response = self
            .authorize(self.client.post(&url))
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            // Caller logs sign-out failures.
            return Err(SessionError::Api {
                status,
                message: err_body,
            });
        }

        info!("Sign-out succeeded (request_id={})", request_id);
        Ok(())
    }
}
