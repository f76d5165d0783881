//! A named piece that slides across the board.

use super::Point;

/// A robot is an identity plus the coordinate of the tile it currently occupies. The coordinate
/// is the only mutable state in the whole model and is written exclusively by the board's
/// movement resolution.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Robot {
    name: String,
    tile: Option<Point>,
}

impl Robot {
    /// A robot that is not yet standing on any tile.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            tile: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tile(&self) -> Option<Point> {
        self.tile
    }

    pub fn is_placed(&self) -> bool {
        self.tile.is_some()
    }

    pub(crate) fn set_tile(&mut self, tile: Point) {
        self.tile = Some(tile);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_robot_starts_unplaced() {
        let robot = Robot::new("alpha");
        assert_eq!(robot.name(), "alpha");
        assert_eq!(robot.tile(), None);
        assert!(!robot.is_placed());
    }

    #[test]
    fn test_robot_tracks_its_tile() {
        let mut robot = Robot::new("alpha");
        robot.set_tile(Point::new(1, 2));
        assert_eq!(robot.tile(), Some(Point::new(1, 2)));
        assert!(robot.is_placed());
    }
}
