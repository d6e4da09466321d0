use crate::error::{RoverError, RoverResult};
use crate::geometry::Neighbors;
use crate::heading::{Command, Turn};
use crate::obstacles::ObstacleSet;
use crate::position::Position;
use log::{debug, trace};

/// Length of a generated command string unless configured otherwise
pub const DEFAULT_MAX_COMMAND_LENGTH: usize = 9;

/// Longest command string the generator will build
pub const MAX_PLAN_LENGTH: usize = 4096;

/// One generator decision: the command appended and the simulated pose after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    pub command: Command,
    pub position: Position,
}

/// Build a command string of exactly `max_length` characters from `start`.
///
/// Greedy and local: at each step prefer going forward, then turning left,
/// then turning right, into a cell that is neither an obstacle nor a cave.
/// When none qualifies it turns left anyway. Works on its own copy of the
/// pose; nothing outside is moved. Lengths above [`MAX_PLAN_LENGTH`] are
/// rejected before any work is done.
pub fn plan(start: Position, obstacles: &ObstacleSet, max_length: usize) -> RoverResult<String> {
    if max_length > MAX_PLAN_LENGTH {
        return Err(RoverError::CommandTooLong {
            requested: max_length,
            limit: MAX_PLAN_LENGTH,
        });
    }

    let mut neighbors = Neighbors::of(&start);
    if !obstacles.can_move(&neighbors) {
        return Err(RoverError::Surrounded);
    }

    let mut current = start;
    let mut command = String::new();

    while command.len() < max_length {
        let next = next_step(&current, &neighbors, obstacles);
        trace!(
            "plan step {}: {} at {} -> {}",
            command.len() + 1,
            next.command,
            current,
            next.position
        );

        command.push(next.command.as_char());
        current = next.position;
        neighbors = Neighbors::of(&current);
    }

    debug!("planned {} from {} ending at {}", command, start, current);
    Ok(command)
}

/// Pick the next command for `current` given its precomputed neighbors
pub fn next_step(current: &Position, neighbors: &Neighbors, obstacles: &ObstacleSet) -> PlanStep {
    let open = |candidate: Option<Position>| {
        candidate.filter(|position| {
            !obstacles.is_obstacle(position) && !obstacles.is_cave(position)
        })
    };

    if let Some(position) = open(neighbors.forward) {
        return PlanStep {
            command: Command::FORWARD,
            position,
        };
    }

    let turn = if open(neighbors.left).is_some() {
        Turn::Left
    } else if open(neighbors.right).is_some() {
        Turn::Right
    } else {
        // Boxed in ahead: keep turning left and re-evaluate next step
        Turn::Left
    };

    PlanStep {
        command: Command::Turn(turn),
        position: current.with_heading(current.heading.rotate(turn)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::Heading;

    #[test]
    fn test_open_field_goes_straight() {
        let start = Position::new(0, 0, Heading::North);
        let command = plan(start, &ObstacleSet::default(), DEFAULT_MAX_COMMAND_LENGTH).unwrap();
        assert_eq!(command, "FFFFFFFFF");
    }

    #[test]
    fn test_respects_max_length() {
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::empty();
        assert_eq!(plan(start, &obstacles, 3).unwrap(), "FFF");
        assert_eq!(plan(start, &obstacles, 0).unwrap(), "");
    }

    #[test]
    fn test_rejects_length_above_limit() {
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::empty();

        assert_eq!(
            plan(start, &obstacles, usize::MAX),
            Err(RoverError::CommandTooLong {
                requested: usize::MAX,
                limit: MAX_PLAN_LENGTH,
            })
        );
        assert_eq!(plan(start, &obstacles, MAX_PLAN_LENGTH).unwrap().len(), MAX_PLAN_LENGTH);
    }

    #[test]
    fn test_turns_away_from_grid_edge() {
        let start = Position::new(0, i32::MAX, Heading::North);
        let command = plan(start, &ObstacleSet::empty(), 3).unwrap();
        assert_eq!(command, "LFF");
    }

    #[test]
    fn test_surrounded_fails_before_planning() {
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::new([(0, 1), (0, -1), (1, 0), (-1, 0)]);
        assert_eq!(plan(start, &obstacles, 9), Err(RoverError::Surrounded));
    }

    #[test]
    fn test_prefers_left_over_right() {
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::new([(0, 1)]);
        let neighbors = Neighbors::of(&start);

        let step = next_step(&start, &neighbors, &obstacles);
        assert_eq!(step.command, Command::LEFT);
        assert_eq!(step.position, Position::new(0, 0, Heading::West));
    }

    #[test]
    fn test_turns_right_when_left_blocked() {
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::new([(0, 1), (-1, 0)]);
        let neighbors = Neighbors::of(&start);

        let step = next_step(&start, &neighbors, &obstacles);
        assert_eq!(step.command, Command::RIGHT);
        assert_eq!(step.position, Position::new(0, 0, Heading::East));
    }

    #[test]
    fn test_falls_back_to_left_when_only_backward_is_open() {
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::new([(0, 1), (-1, 0), (1, 0)]);

        let command = plan(start, &obstacles, 3).unwrap();
        // Left, then facing west the south cell is to the left
        assert_eq!(command, "LLF");
    }

    #[test]
    fn test_avoids_entering_a_cave() {
        // (0, 1) is a pocket closed on three sides when entered heading north
        let start = Position::new(0, 0, Heading::North);
        let obstacles = ObstacleSet::new([(0, 2), (-1, 1), (1, 1)]);

        let command = plan(start, &obstacles, 1).unwrap();
        assert_eq!(command, "L");
    }
}
