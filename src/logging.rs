use crate::config::LoggingConfig;
use log::LevelFilter;
use std::io::Write;

/// `[prefix] ` tag written in front of every message, empty when unset
pub fn format_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!("[{}] ", prefix)
    }
}

/// Install the process logger.
///
/// `RUST_LOG` wins over the configured level. A disabled config turns every
/// level off; rover behaviour does not depend on it either way.
pub fn init(config: &LoggingConfig) {
    let prefix = format_prefix(&config.prefix);

    let mut builder = if config.enabled {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.level.as_str()))
    } else {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Off);
        builder
    };
    builder.format(move |buf, record| {
        writeln!(buf, "{:<5} {}{}", record.level(), prefix, record.args())
    });

    // A logger may already be installed (tests, embedding); keep it
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prefix() {
        assert_eq!(format_prefix("RoverService"), "[RoverService] ");
        assert_eq!(format_prefix(""), "");
    }

    #[test]
    fn test_disabled_logging_leaves_results_unchanged() {
        use crate::heading::Heading;
        use crate::position::Position;
        use crate::rover::Rover;

        init(&LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        });

        let mut rover = Rover::default();
        rover.create(Position::new(4, 2, Heading::East));
        assert_eq!(rover.move_by("FLFFFRFLB").unwrap(), Position::new(6, 4, Heading::North));
        assert_eq!(rover.move_by("LGF").unwrap_err().to_string(), "Invalid Command G in LGF");

        rover.create(Position::new(0, 0, Heading::North));
        assert_eq!(rover.generate_command().unwrap(), "FFFFFFFFF");
    }
}
