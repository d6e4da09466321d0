#![allow(dead_code)]

use rover_sim::layout::{self, Bounds};
use rover_sim::obstacles::DEFAULT_OBSTACLES;
use rover_sim::{Heading, ObstacleSet, Position, Rover, RoverError, Turn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Expected failure of a scenario
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedError {
    NotCreated,
    InvalidCommand { command: char },
    Collision { position: Position, obstacle: (i32, i32) },
    Surrounded,
}

/// Scenario file format.
///
/// With `commands` the rover replays them; without, it generates a command
/// which is compared against `expectedCommand` and then replayed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub test_name: String,
    #[serde(default)]
    pub start: Option<Position>,
    #[serde(default = "default_obstacles")]
    pub obstacles: Vec<(i32, i32)>,
    #[serde(default)]
    pub commands: Option<String>,
    #[serde(default)]
    pub expected_position: Option<Position>,
    #[serde(default)]
    pub expected_command: Option<String>,
    #[serde(default)]
    pub expected_error: Option<ExpectedError>,
    #[serde(default)]
    pub expected_message: Option<String>,
}

fn default_obstacles() -> Vec<(i32, i32)> {
    DEFAULT_OBSTACLES.to_vec()
}

/// Load a scenario from JSON file
pub fn load_scenario(path: &Path) -> Result<Scenario, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&contents)?;
    Ok(scenario)
}

/// All `.json` scenario files in a directory, sorted by name
pub fn scenario_files(dir: &str) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

pub fn rover_at(x: i32, y: i32, heading: Heading) -> Rover {
    rover_on(ObstacleSet::default(), x, y, heading)
}

pub fn rover_on(obstacles: ObstacleSet, x: i32, y: i32, heading: Heading) -> Rover {
    let mut rover = Rover::new(obstacles);
    rover.create(Position::new(x, y, heading));
    rover
}

/// Rotate a cell a quarter turn clockwise about the origin
pub fn rotate_cell((x, y): (i32, i32)) -> (i32, i32) {
    (y, -x)
}

pub fn rotate_position(position: &Position) -> Position {
    let (x, y) = rotate_cell(position.cell());
    Position::new(x, y, position.heading.rotate(Turn::Right))
}

/// Same scenario with the whole world turned a quarter turn clockwise
pub fn rotate_scenario(scenario: &Scenario) -> Scenario {
    let expected_error = scenario.expected_error.clone().map(|error| match error {
        ExpectedError::Collision { position, obstacle } => ExpectedError::Collision {
            position: rotate_position(&position),
            obstacle: rotate_cell(obstacle),
        },
        other => other,
    });

    Scenario {
        test_name: format!("{}_rot", scenario.test_name),
        start: scenario.start.as_ref().map(rotate_position),
        obstacles: scenario.obstacles.iter().copied().map(rotate_cell).collect(),
        commands: scenario.commands.clone(),
        expected_position: scenario.expected_position.as_ref().map(rotate_position),
        expected_command: scenario.expected_command.clone(),
        expected_error,
        // Message embeds coordinates; only checked unrotated
        expected_message: None,
    }
}

fn to_rover_error(expected: &ExpectedError, scenario: &Scenario) -> RoverError {
    match expected {
        ExpectedError::NotCreated => RoverError::NotCreated,
        ExpectedError::InvalidCommand { command } => RoverError::InvalidCommand {
            command: *command,
            commands: scenario.commands.clone().unwrap_or_default(),
        },
        ExpectedError::Collision { position, obstacle } => RoverError::Collision {
            position: *position,
            obstacle: *obstacle,
        },
        ExpectedError::Surrounded => RoverError::Surrounded,
    }
}

fn check_error(scenario: &Scenario, actual: RoverError) -> Result<(), String> {
    let Some(expected) = &scenario.expected_error else {
        return Err(format!("unexpected error: {}", actual));
    };
    let expected_error = to_rover_error(expected, scenario);
    if actual != expected_error {
        return Err(format!("expected {:?}, got {:?}", expected_error, actual));
    }
    if let Some(message) = &scenario.expected_message {
        if actual.to_string() != *message {
            return Err(format!("expected message {:?}, got {:?}", message, actual.to_string()));
        }
    }
    Ok(())
}

fn check_position(scenario: &Scenario, rover: &Rover, actual: Position) -> Result<(), String> {
    if scenario.expected_error.is_some() {
        return Err(format!("expected an error, rover ended at {}", actual));
    }
    if let Some(expected) = scenario.expected_position {
        if actual != expected {
            return Err(format!("expected {}, got {}", expected, actual));
        }
    }
    if rover.position() != Some(actual) {
        return Err("returned position was not committed".to_string());
    }
    Ok(())
}

/// Run a single scenario variant
pub fn run_single_scenario(scenario: &Scenario) -> Result<(), String> {
    let mut rover = Rover::new(ObstacleSet::new(scenario.obstacles.iter().copied()));
    if let Some(start) = scenario.start {
        rover.create(start);
    }
    let before = rover.position();

    if let Some(commands) = &scenario.commands {
        return match rover.move_by(commands) {
            Ok(position) => check_position(scenario, &rover, position),
            Err(e) => {
                check_error(scenario, e)?;
                if rover.position() != before {
                    return Err("failed move changed the committed position".to_string());
                }
                Ok(())
            }
        };
    }

    let command = match rover.generate_command() {
        Ok(command) => command,
        Err(e) => return check_error(scenario, e),
    };
    if rover.position() != before {
        return Err("generate_command changed the committed position".to_string());
    }
    if let Some(expected) = &scenario.expected_command {
        if command != *expected {
            return Err(format!("expected command {}, got {}", expected, command));
        }
    }

    match rover.move_by(&command) {
        Ok(position) => check_position(scenario, &rover, position),
        Err(e) => Err(format!("replaying {} failed: {}", command, e)),
    }
}

/// Run a scenario in all 4 rotations (0, 90, 180, 270 degrees)
/// Returns the failing variant and reason, if any
pub fn run_scenario(scenario: &Scenario) -> Result<(), (String, String)> {
    let mut variant = scenario.clone();

    for name in ["rot0", "rot90", "rot180", "rot270"] {
        run_single_scenario(&variant).map_err(|reason| (name.to_string(), reason))?;
        variant = rotate_scenario(&variant);
    }

    Ok(())
}

/// Visualize a rover and its field, for test output
pub fn visualize(rover: &Rover) -> String {
    let position = rover.position();
    let bounds = Bounds::enclosing(rover.obstacles(), position.as_ref());
    layout::render(rover.obstacles(), position.as_ref(), bounds)
}
