pub mod auth;
pub mod logging;
pub mod users;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_STORAGE_PATH};
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_API_KEY: &str = "api-key";
pub const ARG_STORAGE: &str = "storage";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userdesk")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_BASE_URL)
                .long("base-url")
                .help("Base URL of the user-directory API")
                .env("USERDESK_BASE_URL")
                .default_value(DEFAULT_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_API_KEY)
                .long("api-key")
                .help("API key sent as x-api-key")
                .env("USERDESK_API_KEY")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_STORAGE)
                .long("storage")
                .help("Path of the local key-value store holding the session")
                .env("USERDESK_STORAGE")
                .default_value(DEFAULT_STORAGE_PATH)
                .global(true),
        )
        .subcommand(auth::login())
        .subcommand(auth::register())
        .subcommand(users::command())
        .subcommand(auth::logout());

    logging::with_args(command)
}
