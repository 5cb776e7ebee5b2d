use clap::{Arg, Command};

pub const CMD_USERS: &str = "users";
pub const CMD_LIST: &str = "list";
pub const CMD_EDIT: &str = "edit";
pub const CMD_DELETE: &str = "delete";

pub const ARG_PAGE: &str = "page";
pub const ARG_ID: &str = "id";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";
pub const ARG_EMAIL: &str = "email";

fn page() -> Arg {
    Arg::new(ARG_PAGE)
        .long("page")
        .help("Page to load")
        .default_value("1")
        .value_parser(clap::value_parser!(u32).range(1..))
}

fn id() -> Arg {
    Arg::new(ARG_ID)
        .help("User id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_USERS)
        .about("Manage users (requires a session token)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_LIST)
                .about("Show one page of users")
                .arg(page()),
        )
        .subcommand(
            Command::new(CMD_EDIT)
                .about("Edit a user on the given page; unset fields keep their value")
                .arg(id())
                .arg(page())
                .arg(
                    Arg::new(ARG_FIRST_NAME)
                        .long("first-name")
                        .help("New first name"),
                )
                .arg(
                    Arg::new(ARG_LAST_NAME)
                        .long("last-name")
                        .help("New last name"),
                )
                .arg(Arg::new(ARG_EMAIL).long("email").help("New email address")),
        )
        .subcommand(
            Command::new(CMD_DELETE)
                .about("Delete a user and show the page without it")
                .arg(id())
                .arg(page()),
        )
}
