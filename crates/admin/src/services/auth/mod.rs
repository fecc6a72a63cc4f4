//! Admin sign-in, logout, and password change.
//!
//! The hosted auth service is the only credential authority. This service
//! orchestrates it together with the local session state: sign-in persists
//! the signed-in markers and credential mirror, fetches the profile row, and
//! enforces the admin role gate; logout clears everything together.
//!
//! Password changes re-verify the current password with a fresh password
//! sign-in against the hosted service rather than trusting the local
//! mirror - the mirror stays a convenience check only (see
//! [`crate::credential`]).

mod error;

pub use error::AuthError;

use secrecy::SecretString;
use tracing::instrument;

use crate::backend::{AuthClient, DataClient, SelectQuery};
use crate::credential::CredentialMirror;
use crate::models::Account;
use crate::session::{SessionStore, keys};

/// Minimum length for a new password (form check; the hosted service may
/// apply stricter rules of its own).
const MIN_PASSWORD_LENGTH: usize = 8;

/// Session key for the bearer token of the current hosted session.
const ACCESS_TOKEN: &str = "access_token";

/// Admin authentication service.
pub struct AuthService<'a> {
    auth: &'a AuthClient,
    data: &'a DataClient,
    session: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(
        auth: &'a AuthClient,
        data: &'a DataClient,
        session: &'a SessionStore,
    ) -> Self {
        Self {
            auth,
            data,
            session,
        }
    }

    /// Sign an administrator in.
    ///
    /// On success the local session holds the email, auth user id, bearer
    /// token, credential mirror, and cached profile blob, and the profile is
    /// returned. A non-admin profile forces a full logout and returns
    /// [`AuthError::Forbidden`].
    ///
    /// # Errors
    ///
    /// Returns an error if the hosted service rejects the credentials, the
    /// profile row cannot be fetched, or local state cannot be written.
    #[instrument(skip(self, password), fields(email = email))]
    pub async fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Account, AuthError> {
        let auth_session = self.auth.sign_in_with_password(email, password).await?;

        self.session.set(keys::EMAIL, email)?;
        self.session
            .set(keys::USER_ID, auth_session.user.id.to_string())?;
        self.session.set(ACCESS_TOKEN, &auth_session.access_token)?;
        CredentialMirror::new(self.session).store(password)?;

        // Profile row carries the role; auth_id links it to the auth user.
        let profile: Account = match self
            .data
            .select_single(
                "User",
                SelectQuery::new().eq("auth_id", auth_session.user.id),
            )
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                // No profile means no role evidence: fail closed.
                self.force_logout().await;
                return Err(e.into());
            }
        };

        if !profile.role.is_admin() {
            tracing::warn!(email, "non-admin account attempted admin sign-in");
            self.force_logout().await;
            return Err(AuthError::Forbidden);
        }

        let blob = serde_json::to_string(&profile).map_err(crate::session::SessionError::Parse)?;
        self.session.set(keys::USER_DATA, blob)?;

        tracing::info!(email, account_id = %profile.id, "admin signed in");
        Ok(profile)
    }

    /// Sign out.
    ///
    /// Revokes the hosted session (best effort) and clears every local
    /// marker together - email, user id, token, mirror, cached profile.
    ///
    /// # Errors
    ///
    /// Returns an error only if local state cannot be cleared; a failed
    /// remote revocation is logged and does not block the logout.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Some(token) = self.session.get(ACCESS_TOKEN) {
            if let Err(e) = self.auth.sign_out(&token).await {
                tracing::warn!("remote sign-out failed: {e}");
            }
        }

        self.session.clear()?;
        tracing::info!("admin signed out");
        Ok(())
    }

    /// Change the signed-in administrator's password.
    ///
    /// The current password is re-verified against the hosted auth service
    /// with a fresh password sign-in; the local mirror is never the
    /// authority here. On success the hosted password is updated and the
    /// mirror is refreshed for the new password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CurrentPasswordIncorrect`] if the hosted service
    /// rejects the current password, [`AuthError::PasswordTooShort`] if the
    /// new password fails the form check, or [`AuthError::NotSignedIn`] if
    /// no session is active.
    #[instrument(skip(self, current, new))]
    pub async fn change_password(
        &self,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<(), AuthError> {
        let email = self
            .session
            .get(keys::EMAIL)
            .ok_or(AuthError::NotSignedIn)?;

        validate_new_password(new)?;

        // Mirror preflight: fails closed, and a mismatch saves the remote
        // round trip. The hosted re-verification below stays the authority.
        if !self.verify_current_password(current) {
            return Err(AuthError::CurrentPasswordIncorrect);
        }

        // Fresh sign-in both proves the current password and yields a token
        // scoped to the user whose password we are about to change.
        let fresh = self
            .auth
            .sign_in_with_password(&email, current)
            .await
            .map_err(|e| match e {
                crate::backend::BackendError::Unauthorized(_) => {
                    AuthError::CurrentPasswordIncorrect
                }
                other => AuthError::Backend(other),
            })?;

        self.auth.update_password(&fresh.access_token, new).await?;

        self.session.set(ACCESS_TOKEN, &fresh.access_token)?;
        CredentialMirror::new(self.session).store(new)?;

        tracing::info!(email, "password changed");
        Ok(())
    }

    /// Local convenience check against the credential mirror.
    ///
    /// Suitable for form preflight only; [`Self::change_password`] performs
    /// the authoritative verification.
    #[must_use]
    pub fn verify_current_password(&self, password: &SecretString) -> bool {
        CredentialMirror::new(self.session).verify(password)
    }

    /// The cached profile from the last successful sign-in, if any.
    #[must_use]
    pub fn cached_profile(&self) -> Option<Account> {
        let blob = self.session.get(keys::USER_DATA)?;
        serde_json::from_str(&blob).ok()
    }

    /// Clear all local markers and best-effort revoke the hosted session.
    async fn force_logout(&self) {
        if let Some(token) = self.session.get(ACCESS_TOKEN) {
            if let Err(e) = self.auth.sign_out(&token).await {
                tracing::warn!("remote sign-out during forced logout failed: {e}");
            }
        }
        if let Err(e) = self.session.clear() {
            tracing::warn!("failed to clear session during forced logout: {e}");
        }
    }
}

fn validate_new_password(new: &SecretString) -> Result<(), AuthError> {
    use secrecy::ExposeSecret;

    if new.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
