//! Typed session context. Forms, the route guard and the user list receive a
//! `Session` instead of touching storage keys directly, so the key names and the
//! one-shot semantics of the pending credentials live in one place.

use super::{KeyValueStore, StorageError};
use secrecy::{ExposeSecret, SecretString};
use std::{fmt, sync::Arc};
use tracing::debug;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const PENDING_EMAIL_KEY: &str = "tempEmail";
pub const PENDING_PASSWORD_KEY: &str = "tempPassword";

/// Email/password pair parked by a successful sign-up for the next sign-in form.
#[derive(Clone, Debug)]
pub struct PendingCredentials {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the session token. An empty stored value counts as absent.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn token(&self) -> Result<Option<SecretString>, StorageError> {
        Ok(self
            .store
            .get(AUTH_TOKEN_KEY)?
            .filter(|token| !token.is_empty())
            .map(SecretString::from))
    }

    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn set_token(&self, token: &SecretString) -> Result<(), StorageError> {
        debug!("storing session token");
        self.store.set(AUTH_TOKEN_KEY, token.expose_secret())
    }

    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn clear_token(&self) -> Result<(), StorageError> {
        debug!("clearing session token");
        self.store.remove(AUTH_TOKEN_KEY)
    }

    /// Parks credentials for the next sign-in form, replacing any earlier pair.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn stash_pending(&self, credentials: &PendingCredentials) -> Result<(), StorageError> {
        self.store.set(PENDING_EMAIL_KEY, &credentials.email)?;
        self.store
            .set(PENDING_PASSWORD_KEY, credentials.password.expose_secret())
    }

    /// Takes the pending credentials and deletes them.
    ///
    /// Both keys are cleared even when only one of them was present; the pair is
    /// returned only when both are non-empty.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written.
    pub fn take_pending(&self) -> Result<Option<PendingCredentials>, StorageError> {
        let email = self.store.get(PENDING_EMAIL_KEY)?;
        let password = self.store.get(PENDING_PASSWORD_KEY)?;

        if email.is_none() && password.is_none() {
            return Ok(None);
        }

        self.store.remove(PENDING_EMAIL_KEY)?;
        self.store.remove(PENDING_PASSWORD_KEY)?;

        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                debug!("consumed pending credentials");
                Ok(Some(PendingCredentials {
                    email,
                    password: SecretString::from(password),
                }))
            }
            _ => Ok(None),
        }
    }
}
