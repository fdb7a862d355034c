// src/application/session.rs
use tracing::{debug, info};

use crate::application::KeyValueStore;
use crate::constants::{DEMO_PASSWORD, DEMO_USERNAME, SESSION_KEY};
use crate::domain::DomainError;

/// Placeholder login gate.
///
/// Compares against the fixed pair in [`crate::constants`] and remembers a
/// success in the local store. It protects nothing: the credentials are
/// public constants and the flag is a plain value anyone can write. Replace it
/// with an external identity provider before relying on it.
#[derive(Debug, Clone)]
pub struct SessionGate<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns `Ok(false)` on a mismatch without touching the store
    pub fn login(&mut self, user: &str, pass: &str) -> Result<bool, DomainError> {
        if user != DEMO_USERNAME || pass != DEMO_PASSWORD {
            debug!(user, "Rejected login");
            return Ok(false);
        }
        self.store.set(SESSION_KEY, "true")?;
        info!(user, "Session started");
        Ok(true)
    }

    pub fn is_authenticated(&self) -> Result<bool, DomainError> {
        Ok(self.store.get(SESSION_KEY)?.as_deref() == Some("true"))
    }

    pub fn logout(&mut self) -> Result<(), DomainError> {
        self.store.remove(SESSION_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    /// Like [`SessionGate::is_authenticated`] but failing with `AuthenticationFailed`
    pub fn require(&self) -> Result<(), DomainError> {
        if self.is_authenticated()? {
            Ok(())
        } else {
            Err(DomainError::AuthenticationFailed)
        }
    }
}
