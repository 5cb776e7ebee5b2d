use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGOUT: &str = "logout";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

fn email(required: bool) -> Arg {
    Arg::new(ARG_EMAIL)
        .long("email")
        .help("Account email address")
        .required(required)
}

fn password(required: bool) -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("USERDESK_PASSWORD")
        .hide_env_values(true)
        .required(required)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in and store the session token")
        .long_about(
            "Sign in and store the session token. After `register`, email and password are \
             pre-filled from the pending credentials; flags override them.",
        )
        .arg(email(false))
        .arg(password(false))
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account, then continue with `login`")
        .arg(email(true))
        .arg(password(true))
}

#[must_use]
pub fn logout() -> Command {
    Command::new(CMD_LOGOUT).about("Remove the stored session token")
}
