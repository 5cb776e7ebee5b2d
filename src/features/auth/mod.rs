//! Sign-in, sign-up and the route guard. The form hands a fresh sign-up over to
//! the sign-in page through the session's pending credentials and persists the
//! token on sign-in. This module handles passwords and tokens; neither may be
//! logged.

pub mod client;
pub mod form;
mod guard;
pub mod types;

pub use form::{AuthForm, AuthMode};
pub use guard::{GuardOutcome, RouteGuard};
