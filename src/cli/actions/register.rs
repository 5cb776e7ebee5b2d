use crate::{
    cli::globals::GlobalArgs,
    features::auth::{AuthForm, AuthMode},
};
use anyhow::{Context, Result};
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

/// # Errors
/// Returns an error if the registration is rejected or the pending
/// credentials cannot be stored.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.globals.api()?;
    let mut form = AuthForm::mount(
        AuthMode::SignUp,
        args.globals.session(),
        args.globals.notifier(),
    )
    .context("failed to open session store")?;
    form.set_email(args.email);
    form.set_password(args.password);

    let route = form.submit(&api).await.context("sign-up failed")?;
    println!("Registered. Run `userdesk login` to continue ({route}).");

    Ok(())
}
