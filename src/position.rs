use crate::geometry::Axis;
use crate::heading::Heading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rover pose on the grid.
///
/// Positions are plain values: every change produces a new `Position`
/// instead of editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl Position {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Position { x, y, heading }
    }

    /// Coordinate pair, heading dropped
    pub fn cell(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Value of one coordinate axis
    pub fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy with one axis replaced
    pub fn with_axis(&self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => Position { x: value, ..*self },
            Axis::Y => Position { y: value, ..*self },
        }
    }

    /// Copy with a different heading, same coordinates
    pub fn with_heading(&self, heading: Heading) -> Self {
        Position { heading, ..*self }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_axis_leaves_original_untouched() {
        let original = Position::new(4, 2, Heading::East);
        let moved = original.with_axis(Axis::X, 5);

        assert_eq!(moved, Position::new(5, 2, Heading::East));
        assert_eq!(original, Position::new(4, 2, Heading::East));
        assert_eq!(original.with_axis(Axis::Y, -1).cell(), (4, -1));
    }

    #[test]
    fn test_display_matches_collision_format() {
        let position = Position::new(1, 3, Heading::East);
        assert_eq!(position.to_string(), "(1, 3) EAST");
    }
}
