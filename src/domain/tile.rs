//! A single board cell.

use super::{Direction, DirectionSet, Point};

/// One cell of the grid: its coordinates, whether it can be entered at all, the directions in
/// which its wall has an open gap to the neighboring cell, and the robot (if any) for which it
/// is a goal. Created once when the board is laid out and immutable afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tile {
    position: Point,
    accessible: bool,
    gaps: DirectionSet,
    target: Option<String>,
}

impl Tile {
    /// An accessible tile with all wall gaps closed and no target.
    pub const fn new(row: i32, col: i32) -> Self {
        Self {
            position: Point::new(row, col),
            accessible: true,
            gaps: DirectionSet::EMPTY,
            target: None,
        }
    }

    /// An impassable cell, a hole in the board rather than a walled tile.
    pub const fn hole(row: i32, col: i32) -> Self {
        Self {
            position: Point::new(row, col),
            accessible: false,
            gaps: DirectionSet::EMPTY,
            target: None,
        }
    }

    /// Sets the wall-gap set. A hole has no usable wall gaps, so its set stays empty.
    pub fn with_gaps(self, gaps: DirectionSet) -> Self {
        let gaps = if self.accessible {
            gaps
        } else {
            DirectionSet::EMPTY
        };
        Self { gaps, ..self }
    }

    /// Marks this tile as a goal for the named robot.
    pub fn with_target(self, robot: &str) -> Self {
        Self {
            target: Some(robot.to_owned()),
            ..self
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn row(&self) -> i32 {
        self.position.row()
    }

    pub fn col(&self) -> i32 {
        self.position.col()
    }

    pub fn accessible(&self) -> bool {
        self.accessible
    }

    pub fn gaps(&self) -> DirectionSet {
        self.gaps
    }

    pub fn gap_toward(&self, direction: Direction) -> bool {
        self.gaps.contains(direction)
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
