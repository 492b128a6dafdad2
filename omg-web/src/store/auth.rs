//! Auth slice actions.

use super::AUTH;
use crate::api::client;
use crate::session;
use omg_ui::stores::AuthUser;
use tracing::{info, warn};

/// Sign in with form-encoded credentials. On success both tokens are
/// stored and the user is decoded from the access token.
pub async fn login(username: String, password: String) -> bool {
    AUTH.write().begin_login();

    match client().login(&username, &password).await {
        Ok(_) => match session::current_user() {
            Some(user) => {
                info!(username = %user.username, "signed in");
                AUTH.write().login_succeeded(user);
                true
            }
            None => {
                session::logout();
                AUTH.write().login_failed("Received an unusable token");
                false
            }
        },
        Err(err) => {
            AUTH.write().login_failed(err.to_string());
            false
        }
    }
}

/// Drop the session from both storage scopes and forget the user.
pub fn logout() {
    session::logout();
    AUTH.write().clear_user();
    info!("signed out");
}

/// Re-validate the session against the profile endpoint. Any failure —
/// including a network error — counts as unauthenticated.
pub async fn check_auth() -> bool {
    match client().me().await {
        Ok(profile) => {
            let expires_at = session::current_user().map(|u| u.expires_at).unwrap_or_default();
            AUTH.write().set_user(Some(AuthUser {
                username: profile.username,
                expires_at,
            }));
            true
        }
        Err(err) => {
            warn!(error = %err, "session validation failed");
            session::logout();
            AUTH.write().clear_user();
            false
        }
    }
}

/// One refresh attempt via the token store. Failure ends the session.
pub async fn refresh_session() -> bool {
    match client().refresh_session().await {
        Ok(_) => {
            AUTH.write().set_user(session::current_user());
            true
        }
        Err(err) => {
            warn!(error = %err, "session refresh failed");
            session::logout();
            AUTH.write().clear_user();
            false
        }
    }
}

pub fn clear_error() {
    AUTH.write().clear_error();
}
