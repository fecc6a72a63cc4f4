//! Auth API client for the hosted backend.
//!
//! The hosted auth service is the sole authority on whether a password is
//! correct. Nothing in this crate checks credentials locally; the credential
//! mirror (see `crate::credential`) is a convenience cache only.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::config::BackendConfig;

use super::BackendError;

/// The signed-in auth user as the service reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    /// Auth-service user id; the profile table links to it via `auth_id`.
    pub id: Uuid,
    /// Email the user signed in with.
    pub email: String,
}

/// A session issued by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// The authenticated user.
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordUpdate<'a> {
    password: &'a str,
}

/// Error payload shapes the auth surface uses.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

/// Client for the hosted auth API.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    client: reqwest::Client,
    auth_url: String,
}

impl AuthClient {
    /// Create a new auth API client.
    ///
    /// # Panics
    ///
    /// Panics if the configured API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "apikey",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(AuthClientInner {
                client,
                auth_url: format!("{}/auth/v1", config.project_url.trim_end_matches('/')),
            }),
        }
    }

    /// Sign in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unauthorized`] with the service's message if
    /// the credentials are rejected.
    #[instrument(skip(self, password), fields(email = email))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthSession, BackendError> {
        let response = self
            .inner
            .client
            .post(format!("{}/token", self.inner.auth_url))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant {
                email,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// Revoke a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the revocation. An already
    /// expired token is not an error worth failing a logout over; callers
    /// decide whether to ignore it.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .post(format!("{}/logout", self.inner.auth_url))
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    /// Set a new password for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the service rejects the
    /// new password.
    #[instrument(skip(self, access_token, new_password))]
    pub async fn update_password(
        &self,
        access_token: &str,
        new_password: &SecretString,
    ) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .put(format!("{}/user", self.inner.auth_url))
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .json(&PasswordUpdate {
                password: new_password.expose_secret(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    async fn error_from(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AuthErrorBody>(&text)
            .ok()
            .and_then(|b| b.error_description.or(b.msg).or(b.message))
            .unwrap_or(text);

        match status.as_u16() {
            // The auth surface reports bad credentials as 400 invalid_grant
            400 | 401 | 403 => BackendError::Unauthorized(message),
            _ => BackendError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}
