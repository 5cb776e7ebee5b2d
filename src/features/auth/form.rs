//! Shared sign-in / sign-up form.
//!
//! The sign-in form consumes pending credentials when it mounts, so a fresh
//! sign-up lands on a pre-filled form exactly once. Every failure is reported
//! through the notifier before it is returned; only rejections carry a specific
//! message, transport and server errors share one generic text.

use crate::{
    api::{ApiClient, AppError},
    features::auth::client,
    notify::{Notification, Notifier},
    routes::Route,
    storage::{PendingCredentials, Session, StorageError},
};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const MSG_LOGIN_SUCCESS: &str = "Log in successfully";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed";
pub const MSG_GENERIC_ERROR: &str = "An error occurred. Please try again.";
pub const MSG_REQUIRED: &str = "Email and password are required.";
pub const MSG_INVALID_EMAIL: &str = "Enter a valid email address.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

pub struct AuthForm {
    mode: AuthMode,
    email: String,
    password: SecretString,
    session: Session,
    notifier: Arc<dyn Notifier>,
}

impl AuthForm {
    /// Mounts the form. In sign-in mode any pending credentials are taken from
    /// the session (and thereby deleted) and used to pre-fill the fields.
    ///
    /// # Errors
    /// Returns an error if the session store cannot be read or written.
    pub fn mount(
        mode: AuthMode,
        session: Session,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let mut form = Self {
            mode,
            email: String::new(),
            password: SecretString::default(),
            session,
            notifier,
        };

        if mode == AuthMode::SignIn {
            if let Some(pending) = form.session.take_pending()? {
                debug!("pre-filling sign-in form from pending credentials");
                form.email = pending.email;
                form.password = pending.password;
            }
        }

        Ok(form)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = password;
    }

    /// Submits the form and returns the route to navigate to.
    ///
    /// The fields are left untouched on failure.
    ///
    /// # Errors
    /// Returns the classified error after notifying it.
    #[instrument(skip(self, api), fields(mode = ?self.mode))]
    pub async fn submit(&self, api: &ApiClient) -> Result<Route, AppError> {
        let result = match self.validate() {
            Ok(()) => match self.mode {
                AuthMode::SignIn => self.sign_in(api).await,
                AuthMode::SignUp => self.sign_up(api).await,
            },
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            warn!(kind = ?err.kind(), "auth form submission failed: {err}");
            let message = match err {
                AppError::Validation(message) | AppError::Rejected(message) => message.clone(),
                _ => MSG_GENERIC_ERROR.to_string(),
            };
            self.notifier.notify(Notification::error(message));
        }

        result
    }

    fn validate(&self) -> Result<(), AppError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.expose_secret().is_empty() {
            return Err(AppError::Validation(MSG_REQUIRED.to_string()));
        }
        if !valid_email(email) {
            return Err(AppError::Validation(MSG_INVALID_EMAIL.to_string()));
        }
        Ok(())
    }

    async fn sign_in(&self, api: &ApiClient) -> Result<Route, AppError> {
        let response = client::login(api, self.email.trim(), &self.password).await?;

        let Some(token) = response.token() else {
            return Err(AppError::Rejected(MSG_INVALID_CREDENTIALS.to_string()));
        };

        self.session
            .set_token(&SecretString::from(token.to_string()))?;
        info!("signed in");
        self.notifier.notify(Notification::success(MSG_LOGIN_SUCCESS));

        Ok(Route::UserManagement)
    }

    async fn sign_up(&self, api: &ApiClient) -> Result<Route, AppError> {
        let response = client::register(api, self.email.trim(), &self.password).await?;

        if !response.has_id() {
            return Err(AppError::Rejected(MSG_REGISTRATION_FAILED.to_string()));
        }

        // Plaintext hand-off to the sign-in form; removed on its next mount.
        self.session.stash_pending(&PendingCredentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })?;
        info!("registered, redirecting to sign-in");

        Ok(Route::Login)
    }
}
