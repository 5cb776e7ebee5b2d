//! Maps parsed arguments to an [`Action`].

use crate::cli::{
    actions::{
        login, logout, register,
        users::{self, UsersCommand},
        Action,
    },
    commands::{auth, users as users_cmd},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::parse(matches)?;

    match matches.subcommand() {
        Some((auth::CMD_LOGIN, sub)) => Ok(Action::Login(login::Args {
            globals,
            email: sub.get_one::<String>(auth::ARG_EMAIL).cloned(),
            password: password(sub),
        })),
        Some((auth::CMD_REGISTER, sub)) => Ok(Action::Register(register::Args {
            globals,
            email: sub
                .get_one::<String>(auth::ARG_EMAIL)
                .cloned()
                .context("missing required argument: --email")?,
            password: password(sub).context("missing required argument: --password")?,
        })),
        Some((users_cmd::CMD_USERS, sub)) => Ok(Action::Users(users::Args {
            globals,
            command: users_command(sub)?,
        })),
        Some((auth::CMD_LOGOUT, _)) => Ok(Action::Logout(logout::Args { globals })),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}

fn password(matches: &ArgMatches) -> Option<SecretString> {
    matches
        .get_one::<String>(auth::ARG_PASSWORD)
        .map(|password| SecretString::from(password.clone()))
}

fn page(matches: &ArgMatches) -> u32 {
    matches
        .get_one::<u32>(users_cmd::ARG_PAGE)
        .copied()
        .unwrap_or(crate::features::users::client::DEFAULT_PAGE)
}

fn id(matches: &ArgMatches) -> Result<u64> {
    matches
        .get_one::<u64>(users_cmd::ARG_ID)
        .copied()
        .context("missing required argument: <ID>")
}

fn users_command(matches: &ArgMatches) -> Result<UsersCommand> {
    match matches.subcommand() {
        Some((users_cmd::CMD_LIST, sub)) => Ok(UsersCommand::List { page: page(sub) }),
        Some((users_cmd::CMD_EDIT, sub)) => Ok(UsersCommand::Edit {
            id: id(sub)?,
            page: page(sub),
            first_name: sub.get_one::<String>(users_cmd::ARG_FIRST_NAME).cloned(),
            last_name: sub.get_one::<String>(users_cmd::ARG_LAST_NAME).cloned(),
            email: sub.get_one::<String>(users_cmd::ARG_EMAIL).cloned(),
        }),
        Some((users_cmd::CMD_DELETE, sub)) => Ok(UsersCommand::Delete {
            id: id(sub)?,
            page: page(sub),
        }),
        Some((name, _)) => Err(anyhow!("unknown users command: {name}")),
        None => Err(anyhow!("missing users command")),
    }
}
