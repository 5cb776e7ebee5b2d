use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a level name or its count (`0` = error .. `4` = trace, `5` also
/// means trace) so `USERDESK_LOG_LEVEL` can hold either form.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        let level = level.trim().to_lowercase();
        match level.parse::<u8>() {
            Ok(count) if count <= 5 => Ok(count),
            Ok(count) => Err(format!("log level {count} is out of range (0-5)")),
            Err(_) => LEVEL_NAMES
                .iter()
                .position(|name| *name == level)
                .and_then(|index| u8::try_from(index).ok())
                .ok_or_else(|| format!("unknown log level {level:?}, expected one of {LEVEL_NAMES:?}")),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more to stderr: -v warn, -vv info, -vvv debug, -vvvv trace")
            .long_help(
                "Log more to stderr: -v warn, -vv info, -vvv debug, -vvvv trace. \
                 USERDESK_LOG_LEVEL takes a level name or count; RUST_LOG overrides both.",
            )
            .env("USERDESK_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
