pub mod action_log;
pub mod config;
pub mod error;
pub mod geometry;
pub mod heading;
pub mod layout;
pub mod logging;
pub mod obstacles;
pub mod planner;
pub mod position;
pub mod rover;

pub use error::{RoverError, RoverResult};
pub use heading::{Command, Heading, Motion, Turn};
pub use obstacles::ObstacleSet;
pub use position::Position;
pub use rover::Rover;
