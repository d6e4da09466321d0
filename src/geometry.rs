use crate::heading::{Heading, Motion, Turn};
use crate::position::Position;

/// One of the two grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Which axis a heading moves along and which one lies across it.
///
/// Vertical is the axis changed by `F`/`B` at that heading, horizontal is
/// perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRoles {
    pub vertical: Axis,
    pub horizontal: Axis,
}

/// Resolve axis roles from heading parity.
/// North/South (even index) travel along Y, East/West (odd index) along X.
pub fn axis_roles(heading: Heading) -> AxisRoles {
    if heading.index() % 2 == 0 {
        AxisRoles { vertical: Axis::Y, horizontal: Axis::X }
    } else {
        AxisRoles { vertical: Axis::X, horizontal: Axis::Y }
    }
}

/// Axis value after a single forward or backward step at `heading`.
///
/// South and West (index > 1) flip the sign, so forward decreases the
/// coordinate there. `None` when the step would leave the `i32` range.
pub fn step(motion: Motion, heading: Heading, value: i32) -> Option<i32> {
    let mut delta = match motion {
        Motion::Forward => 1,
        Motion::Backward => -1,
    };
    if heading.index() > 1 {
        delta = -delta;
    }
    value.checked_add(delta)
}

/// Position one forward step from `position` along `axis`, facing `heading`
fn advance(position: &Position, heading: Heading, axis: Axis) -> Option<Position> {
    let value = step(Motion::Forward, heading, position.axis(axis))?;
    Some(position.with_heading(heading).with_axis(axis, value))
}

/// The four cells one step away from a position.
///
/// `forward` keeps the heading and steps along the vertical axis. `left`,
/// `right` and `backward` carry the rotated heading and step forward through
/// it, i.e. where the rover would stand after turning and stepping once.
/// A neighbor past the edge of the coordinate range is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub forward: Option<Position>,
    pub backward: Option<Position>,
    pub left: Option<Position>,
    pub right: Option<Position>,
}

impl Neighbors {
    pub fn of(position: &Position) -> Self {
        let heading = position.heading;
        let AxisRoles { vertical, horizontal } = axis_roles(heading);

        Neighbors {
            forward: advance(position, heading, vertical),
            backward: advance(position, heading.reverse(), vertical),
            left: advance(position, heading.rotate(Turn::Left), horizontal),
            right: advance(position, heading.rotate(Turn::Right), horizontal),
        }
    }

    /// All four neighbors: forward, left, right, backward
    pub fn all(&self) -> [Option<Position>; 4] {
        [self.forward, self.left, self.right, self.backward]
    }

    /// Neighbors reachable without reversing: forward, left, right
    pub fn ahead(&self) -> [Option<Position>; 3] {
        [self.forward, self.left, self.right]
    }
}
