use crate::{
    cli::globals::GlobalArgs,
    features::auth::{AuthForm, AuthMode},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

/// Mount the sign-in form, apply any flags over the pre-filled fields and
/// submit it.
///
/// # Errors
/// Returns an error if the session store fails or the sign-in is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.globals.api()?;
    let mut form = AuthForm::mount(
        AuthMode::SignIn,
        args.globals.session(),
        args.globals.notifier(),
    )
    .context("failed to read pending credentials")?;

    if let Some(email) = args.email {
        form.set_email(email);
    }
    if let Some(password) = args.password {
        form.set_password(password);
    }
    debug!(email = form.email(), "submitting sign-in form");

    let route = form.submit(&api).await.context("sign-in failed")?;
    println!("Signed in. Next: {route}");

    Ok(())
}
