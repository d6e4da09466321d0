use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinal heading of the rover.
///
/// The declaration order is the rotation order: turning right walks forward
/// through [`HEADINGS`], turning left walks backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// All headings in rotation order (index 0..3)
pub const HEADINGS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

/// Direction of a rotation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

/// Direction of a translation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Forward,
    Backward,
}

/// A single rover command: `F`, `B`, `L` or `R`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Motion),
    Turn(Turn),
}

impl Heading {
    /// Position of this heading in [`HEADINGS`]
    pub fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Heading at `index`, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        HEADINGS[index % HEADINGS.len()]
    }

    /// Rotate a quarter turn.
    ///
    /// Right advances the index by one modulo 4. Left wraps index 0 up to the
    /// length of the heading list before subtracting one.
    pub fn rotate(self, turn: Turn) -> Self {
        let index = self.index();
        let rotated = match turn {
            Turn::Right => (index + 1) % HEADINGS.len(),
            Turn::Left => (if index == 0 { HEADINGS.len() } else { index }) - 1,
        };
        Self::from_index(rotated)
    }

    /// Heading after two right turns
    pub fn reverse(self) -> Self {
        self.rotate(Turn::Right).rotate(Turn::Right)
    }

    /// Upper-case name, as used in messages and config files
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Command {
    pub const FORWARD: Command = Command::Move(Motion::Forward);
    pub const BACKWARD: Command = Command::Move(Motion::Backward);
    pub const LEFT: Command = Command::Turn(Turn::Left);
    pub const RIGHT: Command = Command::Turn(Turn::Right);

    /// Parse a single command character; anything outside `FBLR` is `None`
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'F' => Some(Self::FORWARD),
            'B' => Some(Self::BACKWARD),
            'L' => Some(Self::LEFT),
            'R' => Some(Self::RIGHT),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Move(Motion::Forward) => 'F',
            Command::Move(Motion::Backward) => 'B',
            Command::Turn(Turn::Left) => 'L',
            Command::Turn(Turn::Right) => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
