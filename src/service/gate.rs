use std::fmt;
use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::middleware::session::SessionState;

/// Shared-secret gate in front of every page.
#[derive(Clone)]
pub struct CredentialGate {
    secret: Arc<str>,
}

impl fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialGate").finish_non_exhaustive()
    }
}

impl CredentialGate {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Constant-time comparison against the configured secret.
    ///
    /// Takes the submission by value: it is dropped here and never reaches
    /// session state.
    pub fn verify(&self, submitted: String) -> bool {
        bool::from(submitted.as_bytes().ct_eq(self.secret.as_bytes()))
    }

    /// Session state after a login attempt. A failed attempt never
    /// downgrades an already authenticated session.
    pub fn attempt(&self, current: SessionState, submitted: String) -> SessionState {
        if self.verify(submitted) || current.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Rejected
        }
    }
}
