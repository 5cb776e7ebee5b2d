use crate::cli::actions::{login, logout, register, users, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Register(args) => register::execute(args).await,
        Action::Users(args) => users::execute(args).await,
        Action::Logout(args) => logout::execute(args),
    }
}
