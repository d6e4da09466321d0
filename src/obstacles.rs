use crate::geometry::Neighbors;
use crate::position::Position;
use std::collections::HashSet;

/// Cells blocked in the reference field
pub const DEFAULT_OBSTACLES: [(i32, i32); 3] = [(1, 4), (3, 5), (7, 4)];

/// Fixed set of blocked cells on an unbounded grid.
///
/// Built once and never modified; membership ignores heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: HashSet<(i32, i32)>,
}

impl ObstacleSet {
    /// Create a set from blocked coordinate pairs
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        ObstacleSet {
            cells: cells.into_iter().collect(),
        }
    }

    /// Set with no obstacles at all
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Check if the cell at (x, y) is blocked
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn is_obstacle(&self, position: &Position) -> bool {
        self.is_blocked(position.x, position.y)
    }

    /// Like [`ObstacleSet::is_obstacle`] for a neighbor slot; a cell past
    /// the coordinate range (`None`) is treated as blocked.
    pub fn blocks(&self, neighbor: Option<&Position>) -> bool {
        neighbor.map_or(true, |position| self.is_obstacle(position))
    }

    /// A cave is a cell whose forward, left and right neighbors are all
    /// blocked; the only way out is back the way the rover came.
    pub fn is_cave(&self, position: &Position) -> bool {
        Neighbors::of(position)
            .ahead()
            .iter()
            .all(|neighbor| self.blocks(neighbor.as_ref()))
    }

    /// True when at least one of the four neighbors is free
    pub fn can_move(&self, neighbors: &Neighbors) -> bool {
        neighbors
            .all()
            .iter()
            .any(|neighbor| !self.blocks(neighbor.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Blocked cells sorted by (y, x), for stable output
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut cells: Vec<_> = self.cells.iter().copied().collect();
        cells.sort_by_key(|&(x, y)| (y, x));
        cells
    }
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::new(DEFAULT_OBSTACLES)
    }
}
