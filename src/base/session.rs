pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "12345";

/// Per-invocation access state. Starts unauthenticated; the only transition is
/// a successful [`Session::login`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Checks the static credential pair. A failed attempt leaves the session
    /// as it was.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == USERNAME && password == PASSWORD {
            self.authenticated = true;
            tracing::debug!(username, "session authenticated");
            Ok(())
        } else {
            tracing::warn!(username, "rejected credentials");
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn require(&self) -> Result<(), AuthError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(AuthError::Unauthenticated)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not logged in (pass --username and --password)")]
    Unauthenticated,
}
