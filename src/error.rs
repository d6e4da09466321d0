//! Error types for rover operations and the surfaces around them.

use crate::position::Position;
use thiserror::Error;

/// Result type alias for rover operations.
pub type RoverResult<T> = Result<T, RoverError>;

/// Failures raised by the rover controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    /// No position has been set with `create` yet.
    #[error("Rover not created to move")]
    NotCreated,

    /// A character outside `FBLR` in a command string.
    #[error("Invalid Command {command} in {commands}")]
    InvalidCommand {
        /// Offending character.
        command: char,
        /// Full command string as given.
        commands: String,
    },

    /// A step would have landed on an obstacle.
    #[error("{position} STOPPED")]
    Collision {
        /// Last committed position, unchanged by the failed move.
        position: Position,
        /// Blocked cell the step was aimed at.
        obstacle: (i32, i32),
    },

    /// A step would have left the `i32` coordinate range.
    #[error("{position} STOPPED at grid edge")]
    OutOfBounds {
        /// Last committed position, unchanged by the failed move.
        position: Position,
    },

    /// All four neighbors of the rover are obstacles.
    #[error("Rover is surrounded with obstacles")]
    Surrounded,

    /// Requested generated command length is above the planner limit.
    #[error("Command length {requested} exceeds limit {limit}")]
    CommandTooLong { requested: usize, limit: usize },
}

/// Errors from parsing a text layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout contains no rows")]
    Empty,

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown cell '{ch}' at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },

    #[error("layout places more than one rover")]
    MultipleRovers,
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid layout {path}: {source}")]
    Layout {
        path: String,
        #[source]
        source: LayoutError,
    },

    #[error("max_command_length {requested} exceeds limit {limit}")]
    CommandLength { requested: usize, limit: usize },
}
