use crate::error::{RoverError, RoverResult};
use crate::heading::Heading;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Operations performed against the rover controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Rover placed at (x, y, heading)
    Create { x: i32, y: i32, heading: Heading },
    /// Command string sent to the rover
    Move { commands: String },
    /// Command generation requested
    GenerateCommand,
}

/// What an action produced
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Committed position afterwards
    Position { x: i32, y: i32, heading: Heading },
    /// Generated command string
    Command { command: String },
    /// Rejected, with the error message
    Failed { reason: String, collision: bool },
}

/// Logged action with timestamp and outcome
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub action: Action,
    pub outcome: ActionOutcome,
}

impl ActionOutcome {
    fn position(position: &Position) -> Self {
        ActionOutcome::Position {
            x: position.x,
            y: position.y,
            heading: position.heading,
        }
    }

    fn failed(error: &RoverError) -> Self {
        ActionOutcome::Failed {
            reason: error.to_string(),
            collision: matches!(error, RoverError::Collision { .. }),
        }
    }
}

/// Session journal of rover operations
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp
    pub fn log(&mut self, action: Action, outcome: ActionOutcome) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;

        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
            outcome,
        });
    }

    pub fn record_create(&mut self, position: &Position) {
        self.log(
            Action::Create {
                x: position.x,
                y: position.y,
                heading: position.heading,
            },
            ActionOutcome::position(position),
        );
    }

    pub fn record_move(&mut self, commands: &str, result: &RoverResult<Position>) {
        let outcome = match result {
            Ok(position) => ActionOutcome::position(position),
            Err(e) => ActionOutcome::failed(e),
        };
        self.log(Action::Move { commands: commands.to_string() }, outcome);
    }

    pub fn record_generate(&mut self, result: &RoverResult<String>) {
        let outcome = match result {
            Ok(command) => ActionOutcome::Command { command: command.clone() },
            Err(e) => ActionOutcome::failed(e),
        };
        self.log(Action::GenerateCommand, outcome);
    }

    /// Get all logged actions
    pub fn get_actions(&self) -> &Vec<LoggedAction> {
        &self.actions
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.actions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut moves_ok = 0;
        let mut moves_failed = 0;
        let mut collisions = 0;
        let mut generated = 0;
        let mut generate_failed = 0;

        for logged in &self.actions {
            match (&logged.action, &logged.outcome) {
                (Action::Move { .. }, ActionOutcome::Failed { collision, .. }) => {
                    moves_failed += 1;
                    if *collision {
                        collisions += 1;
                    }
                }
                (Action::Move { .. }, _) => moves_ok += 1,
                (Action::GenerateCommand, ActionOutcome::Failed { .. }) => generate_failed += 1,
                (Action::GenerateCommand, _) => generated += 1,
                (Action::Create { .. }, _) => {}
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Moves: {} succeeded, {} failed ({} collisions)\n\
             Generated Commands: {} succeeded, {} failed",
            duration,
            self.actions.len(),
            moves_ok,
            moves_failed,
            collisions,
            generated,
            generate_failed
        )
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}
