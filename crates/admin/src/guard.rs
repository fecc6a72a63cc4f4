//! Route guard: the admin role gate.
//!
//! Two outcomes: `Allowed` renders the protected view, `Redirected` sends
//! the caller to the login page. Allowed requires both a local signed-in
//! marker (the stored email) and a cached profile whose role is `admin`.
//! When either condition fails, every local session marker is cleared - a
//! forced logout - so a half-authenticated state cannot persist.
//!
//! The check is synchronous over local state and never blocks on the
//! network. That makes it deliberately stale relative to the backend's
//! authoritative session: a session revoked server-side stays `Allowed`
//! here until the next sign-in cycle. Enforcement that matters happens in
//! the hosted service's row-level policies; this gate is a routing
//! convenience, not the trust boundary.

use secondxe_core::AccountRole;

use crate::session::{SessionStore, keys};

/// Outcome of the role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the protected view.
    Allowed,
    /// Redirect to the login page; local markers have been cleared.
    Redirected,
}

/// Run the gate against local session state.
///
/// On `Redirected`, stale markers are already cleared when this returns.
#[must_use]
pub fn check(session: &SessionStore) -> GateDecision {
    if session.contains(keys::EMAIL) && cached_role(session) == Some(AccountRole::Admin) {
        return GateDecision::Allowed;
    }

    // Forced logout: never leave a half-authenticated state behind.
    if let Err(e) = session.clear() {
        tracing::warn!("failed to clear session markers during forced logout: {e}");
    }

    GateDecision::Redirected
}

/// Role field of the cached profile blob, if one is cached and well-formed.
fn cached_role(session: &SessionStore) -> Option<AccountRole> {
    let blob = session.get(keys::USER_DATA)?;
    let profile: serde_json::Value = serde_json::from_str(&blob).ok()?;
    let role = profile.get("role")?.as_str()?;
    role.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn signed_in_session(role: &str) -> SessionStore {
        let session = SessionStore::in_memory();
        session.set(keys::EMAIL, "admin@secondxe.example").unwrap();
        session.set(keys::USER_ID, "7f9c24e5").unwrap();
        session
            .set(
                keys::USER_DATA,
                format!(r#"{{"id": 3, "name": "Alice", "role": "{role}"}}"#),
            )
            .unwrap();
        session
    }

    #[test]
    fn test_admin_profile_is_allowed() {
        let session = signed_in_session("admin");
        assert_eq!(check(&session), GateDecision::Allowed);
        // markers survive
        assert!(session.contains(keys::EMAIL));
    }

    #[test]
    fn test_user_profile_is_redirected_and_cleared() {
        let session = signed_in_session("user");
        assert_eq!(check(&session), GateDecision::Redirected);
        assert!(!session.contains(keys::EMAIL));
        assert!(!session.contains(keys::USER_ID));
        assert!(!session.contains(keys::USER_DATA));
    }

    #[test]
    fn test_missing_profile_is_redirected() {
        let session = SessionStore::in_memory();
        session.set(keys::EMAIL, "admin@secondxe.example").unwrap();
        assert_eq!(check(&session), GateDecision::Redirected);
        assert!(!session.contains(keys::EMAIL));
    }

    #[test]
    fn test_missing_email_marker_is_redirected() {
        let session = SessionStore::in_memory();
        session
            .set(keys::USER_DATA, r#"{"role": "admin"}"#)
            .unwrap();
        assert_eq!(check(&session), GateDecision::Redirected);
        assert!(!session.contains(keys::USER_DATA));
    }

    #[test]
    fn test_malformed_profile_blob_is_redirected() {
        let session = SessionStore::in_memory();
        session.set(keys::EMAIL, "admin@secondxe.example").unwrap();
        session.set(keys::USER_DATA, "{not json").unwrap();
        assert_eq!(check(&session), GateDecision::Redirected);
    }
}
