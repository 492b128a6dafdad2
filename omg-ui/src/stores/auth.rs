//! Authentication state slice.

/// The signed-in user as decoded from the access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
    /// Unix timestamp (seconds) at which the access token expires.
    pub expires_at: i64,
}

/// Authentication slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// Whether a login request is in flight.
    pub loading: bool,
    /// Error from the last login attempt.
    pub error: Option<String>,
}

impl AuthState {
    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, user: AuthUser) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn login_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn set_user(&mut self, user: Option<AuthUser>) {
        self.user = user;
    }

    /// Session ended: logout or irrecoverable refresh failure.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_succeeded_clears_loading() {
        let mut state = AuthState::default();
        state.begin_login();
        assert!(state.loading);

        state.login_succeeded(AuthUser {
            username: "alice".to_string(),
            expires_at: 2_000_000_000,
        });
        assert!(!state.loading);
        assert_eq!(state.user.as_ref().unwrap().username, "alice");
    }

    #[test]
    fn test_login_failed_keeps_previous_user() {
        let mut state = AuthState {
            user: Some(AuthUser {
                username: "alice".to_string(),
                expires_at: 2_000_000_000,
            }),
            ..Default::default()
        };
        state.begin_login();
        state.login_failed("Invalid credentials");

        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(state.user.is_some());
    }

    #[test]
    fn test_begin_login_clears_stale_error() {
        let mut state = AuthState::default();
        state.login_failed("Invalid credentials");
        state.begin_login();
        assert!(state.error.is_none());
    }
}
