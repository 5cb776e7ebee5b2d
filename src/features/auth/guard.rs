use crate::{
    routes::Route,
    storage::{Session, StorageError},
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(Route),
}

/// Gates protected routes on the presence of a session token.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Checked once per page load. Public routes always render. The token is
    /// not validated against the API; real access control lives there.
    ///
    /// # Errors
    /// Returns an error if the session store cannot be read.
    pub fn check(session: &Session, route: Route) -> Result<GuardOutcome, StorageError> {
        if !route.is_protected() || session.token()?.is_some() {
            return Ok(GuardOutcome::Render);
        }

        debug!("no session token for {route}, redirecting to {}", Route::Login);
        Ok(GuardOutcome::Redirect(Route::Login))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use secrecy::SecretString;
    use std::sync::Arc;

    fn session() -> Session {
        Session::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn redirects_without_token() -> Result<(), StorageError> {
        let outcome = RouteGuard::check(&session(), Route::UserManagement)?;
        assert_eq!(outcome, GuardOutcome::Redirect(Route::Login));
        Ok(())
    }

    #[test]
    fn public_routes_render_without_token() -> Result<(), StorageError> {
        let session = session();
        assert_eq!(RouteGuard::check(&session, Route::Login)?, GuardOutcome::Render);
        assert_eq!(RouteGuard::check(&session, Route::Register)?, GuardOutcome::Render);
        Ok(())
    }

    #[test]
    fn renders_with_token() -> Result<(), StorageError> {
        let session = session();
        session.set_token(&SecretString::from("QpwL5tke4Pnpja7X4".to_string()))?;
        assert_eq!(
            RouteGuard::check(&session, Route::UserManagement)?,
            GuardOutcome::Render
        );
        Ok(())
    }

    #[test]
    fn redirects_again_after_logout() -> Result<(), StorageError> {
        let session = session();
        session.set_token(&SecretString::from("QpwL5tke4Pnpja7X4".to_string()))?;
        session.clear_token()?;
        assert_eq!(
            RouteGuard::check(&session, Route::UserManagement)?,
            GuardOutcome::Redirect(Route::Login)
        );
        Ok(())
    }
}
