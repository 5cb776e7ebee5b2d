use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// `-v` count to the default log level; zero keeps the subscriber's ERROR default.
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Parse the command line, set up logging and return the action to run.
///
/// # Errors
///
/// Returns an error if telemetry initialization or action dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or_default();
    telemetry::init(get_verbosity_level(verbosity))?;

    let action = dispatch::handler(&matches)?;
    tracing::debug!(?action, "dispatching");
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(get_verbosity_level(0), None);
        assert_eq!(get_verbosity_level(1), Some(Level::WARN));
        assert_eq!(get_verbosity_level(2), Some(Level::INFO));
        assert_eq!(get_verbosity_level(3), Some(Level::DEBUG));
        assert_eq!(get_verbosity_level(4), Some(Level::TRACE));
        assert_eq!(get_verbosity_level(9), Some(Level::TRACE));
    }
}
