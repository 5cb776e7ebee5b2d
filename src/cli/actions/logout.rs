use crate::{cli::globals::GlobalArgs, features::users::UserListController};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// # Errors
/// Returns an error if the session token cannot be removed.
pub fn execute(args: Args) -> Result<()> {
    let controller = UserListController::new(
        args.globals.api()?,
        args.globals.session(),
        args.globals.notifier(),
    );
    let route = controller.logout().context("failed to clear session")?;
    println!("Logged out. Next: {route}");
    Ok(())
}
