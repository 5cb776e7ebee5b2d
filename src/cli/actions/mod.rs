pub mod login;
pub mod logout;
pub mod register;
pub mod users;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    Users(users::Args),
    Logout(logout::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
