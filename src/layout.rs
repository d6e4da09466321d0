//! Text form of an obstacle field.
//!
//! Format:
//! - `#`: obstacle
//! - `.`: free cell
//! - `^ > v <`: rover facing north, east, south, west
//!
//! The top line is the highest `y`. Columns grow with `x`.

use crate::error::LayoutError;
use crate::heading::Heading;
use crate::obstacles::ObstacleSet;
use crate::position::Position;

/// Inclusive rectangular window of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Bounds { min_x, min_y, max_x, max_y }
    }

    /// Smallest window containing every obstacle and the rover, padded by one
    pub fn enclosing(obstacles: &ObstacleSet, rover: Option<&Position>) -> Self {
        let cells = obstacles
            .cells()
            .into_iter()
            .chain(rover.map(|p| p.cell()));

        let mut bounds: Option<Bounds> = None;
        for (x, y) in cells {
            bounds = Some(match bounds {
                None => Bounds::new(x, y, x, y),
                Some(b) => Bounds::new(b.min_x.min(x), b.min_y.min(y), b.max_x.max(x), b.max_y.max(y)),
            });
        }

        let b = bounds.unwrap_or(Bounds::new(0, 0, 0, 0));
        Bounds::new(
            b.min_x.saturating_sub(1),
            b.min_y.saturating_sub(1),
            b.max_x.saturating_add(1),
            b.max_y.saturating_add(1),
        )
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

/// Obstacles and an optional rover read back from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub obstacles: ObstacleSet,
    pub rover: Option<Position>,
}

fn heading_symbol(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

fn symbol_heading(ch: char) -> Option<Heading> {
    match ch {
        '^' => Some(Heading::North),
        '>' => Some(Heading::East),
        'v' => Some(Heading::South),
        '<' => Some(Heading::West),
        _ => None,
    }
}

/// Draw the cells inside `bounds`, one line per row, top row first
pub fn render(obstacles: &ObstacleSet, rover: Option<&Position>, bounds: Bounds) -> String {
    let mut result = String::new();

    for y in (bounds.min_y..=bounds.max_y).rev() {
        for x in bounds.min_x..=bounds.max_x {
            let symbol = match rover {
                Some(p) if p.x == x && p.y == y => heading_symbol(p.heading),
                _ if obstacles.is_blocked(x, y) => '#',
                _ => '.',
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}

/// Parse a layout whose bottom-left character sits at `origin`
pub fn parse(text: &str, origin: (i32, i32)) -> Result<Layout, LayoutError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(LayoutError::Empty);
    }

    let width = rows[0].chars().count();
    let height = rows.len();
    let mut blocked = Vec::new();
    let mut rover = None;

    for (row, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(LayoutError::RaggedRow { row, expected: width, actual });
        }

        let y = origin.1 + (height - 1 - row) as i32;
        for (column, ch) in line.chars().enumerate() {
            let x = origin.0 + column as i32;
            match ch {
                '#' => blocked.push((x, y)),
                '.' => {}
                _ => {
                    let heading = symbol_heading(ch)
                        .ok_or(LayoutError::UnknownCell { ch, row, column })?;
                    if rover.is_some() {
                        return Err(LayoutError::MultipleRovers);
                    }
                    rover = Some(Position::new(x, y, heading));
                }
            }
        }
    }

    Ok(Layout {
        obstacles: ObstacleSet::new(blocked),
        rover,
    })
}
