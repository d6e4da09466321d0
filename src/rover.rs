use crate::error::{RoverError, RoverResult};
use crate::geometry::{axis_roles, step};
use crate::heading::Command;
use crate::obstacles::ObstacleSet;
use crate::planner::{self, DEFAULT_MAX_COMMAND_LENGTH};
use crate::position::Position;
use log::{error, info};

/// Rover controller: owns the committed position and the obstacle field.
///
/// The position stays `None` until [`Rover::create`] is called. Successful
/// moves replace it wholesale; failed ones leave it as it was.
#[derive(Debug, Clone)]
pub struct Rover {
    position: Option<Position>,
    obstacles: ObstacleSet,
    max_command_length: usize,
}

impl Rover {
    /// Create an uninitialised rover on the given field
    pub fn new(obstacles: ObstacleSet) -> Self {
        Rover {
            position: None,
            obstacles,
            max_command_length: DEFAULT_MAX_COMMAND_LENGTH,
        }
    }

    pub fn with_max_command_length(mut self, max_command_length: usize) -> Self {
        self.max_command_length = max_command_length;
        self
    }

    /// Place the rover. No check is made against obstacles.
    pub fn create(&mut self, position: Position) {
        info!("rover created at {}", position);
        self.position = Some(position);
    }

    /// Run `commands` and commit the resulting position.
    ///
    /// Stops at the first invalid character or collision; the committed
    /// position is then left untouched.
    pub fn move_by(&mut self, commands: &str) -> RoverResult<Position> {
        let result = self
            .committed()
            .and_then(|start| execute(start, commands, &self.obstacles));

        match result {
            Ok(position) => {
                info!("moved {:?} to {}", commands, position);
                self.position = Some(position);
                Ok(position)
            }
            Err(e) => {
                error!("move {:?} failed: {}", commands, e);
                Err(e)
            }
        }
    }

    /// Where `commands` would take the rover, without committing anything
    pub fn preview(&self, commands: &str) -> RoverResult<Position> {
        execute(self.committed()?, commands, &self.obstacles)
    }

    /// Generate a command string that moves the rover away from its current
    /// position while avoiding obstacles and caves. The committed position
    /// is not changed; replay the result through [`Rover::move_by`].
    pub fn generate_command(&self) -> RoverResult<String> {
        let result = self
            .committed()
            .and_then(|start| planner::plan(start, &self.obstacles, self.max_command_length));

        match &result {
            Ok(command) => info!("generated command {}", command),
            Err(e) => error!("command generation failed: {}", e),
        }
        result
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn max_command_length(&self) -> usize {
        self.max_command_length
    }

    fn committed(&self) -> RoverResult<Position> {
        self.position.ok_or(RoverError::NotCreated)
    }
}

impl Default for Rover {
    fn default() -> Self {
        Self::new(ObstacleSet::default())
    }
}

/// Apply `commands` to `start` one character at a time.
///
/// Turns change the heading only; `F`/`B` step along the heading's vertical
/// axis and are checked against `obstacles` straight away. Collision and
/// grid-edge errors report `start`, not the working pose.
pub fn execute(start: Position, commands: &str, obstacles: &ObstacleSet) -> RoverResult<Position> {
    let mut current = start;

    for ch in commands.chars() {
        let command = Command::from_char(ch).ok_or_else(|| RoverError::InvalidCommand {
            command: ch,
            commands: commands.to_string(),
        })?;

        current = match command {
            Command::Turn(turn) => current.with_heading(current.heading.rotate(turn)),
            Command::Move(motion) => {
                let vertical = axis_roles(current.heading).vertical;
                let value = step(motion, current.heading, current.axis(vertical))
                    .ok_or(RoverError::OutOfBounds { position: start })?;
                let candidate = current.with_axis(vertical, value);

                if obstacles.is_obstacle(&candidate) {
                    return Err(RoverError::Collision {
                        position: start,
                        obstacle: candidate.cell(),
                    });
                }
                candidate
            }
        };
    }

    Ok(current)
}
