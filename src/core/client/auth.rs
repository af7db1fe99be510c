//! Token and session management for the two endpoint families.
//!
//! Modern endpoints authorize with a bearer access token obtained through an
//! OAuth2 refresh grant; the legacy services authorize with a `JSESSIONID`
//! session cookie. The client trusts whatever values are stored here and does
//! not track token expiry itself.

use serde::Deserialize;

use crate::core::error::TdError;

#[derive(Debug, Default)]
pub(super) struct SessionState {
    pub(super) access_token: Option<String>,
    pub(super) refresh_token: Option<String>,
    pub(super) session_id: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl super::TdClient {
    /// The currently stored access token, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.session.read().await.access_token.clone()
    }

    /// The currently stored refresh token, if any.
    pub async fn refresh_token(&self) -> Option<String> {
        self.session.read().await.refresh_token.clone()
    }

    /// The currently stored legacy session id, if any.
    pub async fn session_id(&self) -> Option<String> {
        self.session.read().await.session_id.clone()
    }

    /// Store a legacy session id obtained from the login service.
    pub async fn set_session_id(&self, session_id: impl Into<String>) {
        self.session.write().await.session_id = Some(session_id.into());
    }

    /// Exchange the stored refresh token for a fresh access token.
    ///
    /// The token endpoint rotates the refresh token on some grants; when the
    /// response carries one, it replaces the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::Auth`] when no refresh token is stored, and the
    /// usual transport/status/decode errors otherwise.
    pub async fn refresh_access_token(&self) -> Result<(), TdError> {
        let refresh_token = self
            .refresh_token()
            .await
            .ok_or_else(|| TdError::Auth("refresh token is not set".into()))?;

        let resp = self
            .http()
            .post(self.token_url().clone())
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
                ("client_id", self.client_id()),
            ])
            .send()
            .await?;

        let body = crate::core::net::read_body(resp).await?;
        let token: TokenResponse = serde_json::from_str(&body).map_err(TdError::Json)?;

        let mut state = self.session.write().await;
        state.access_token = Some(token.access_token);
        if let Some(rotated) = token.refresh_token {
            state.refresh_token = Some(rotated);
        }
        Ok(())
    }

    /// Return the stored access token, refreshing once when only a refresh
    /// token is available. Fails before any request is sent when neither
    /// token is present.
    pub(crate) async fn ensure_access_token(&self) -> Result<String, TdError> {
        if let Some(token) = self.access_token().await {
            return Ok(token);
        }
        if self.refresh_token().await.is_some() {
            self.refresh_access_token().await?;
            if let Some(token) = self.access_token().await {
                return Ok(token);
            }
        }
        Err(TdError::Auth(
            "access token is not set and no refresh token is available".into(),
        ))
    }

    /// Return the stored session id or fail before any request is sent.
    pub(crate) async fn ensure_session_id(&self) -> Result<String, TdError> {
        self.session_id()
            .await
            .ok_or_else(|| TdError::Auth("session id is not set".into()))
    }
}
