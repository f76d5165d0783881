//! The board grid with its robots and the movement resolution.

use std::collections::BTreeMap;

use rand::Rng;
use thiserror::Error;

use super::{Direction, Point, Robot, Tile};

/// The aggregate of the whole model: a rectangular grid of tiles, the robots keyed by name, and
/// the robot-to-target-tiles mapping derived once at construction. Grid and wall layout are
/// frozen when the board is built; only robot occupancy changes afterwards, through
/// [`Board::place_robot`], [`Board::slide_robot`] and the scatter operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    tiles: Vec<Vec<Tile>>,
    robots: BTreeMap<String, Robot>,
    targets: BTreeMap<String, Vec<Point>>,
}

impl Board {
    /// Builds a board from its robots and a rectangular row-major tile grid, validating the
    /// grid shape, every tile's stored coordinates, and every target's robot. No partial board
    /// is ever returned.
    pub fn new(robots: Vec<Robot>, tiles: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let mut robot_map = BTreeMap::new();
        for robot in robots {
            if let Some(previous) = robot_map.insert(robot.name().to_owned(), robot) {
                return Err(BoardError::DuplicateRobot(previous.name().to_owned()));
            }
        }

        let num_rows = tiles.len();
        let num_cols = tiles.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(BoardError::EmptyGrid);
        }
        for (row, tiles_row) in tiles.iter().enumerate() {
            if tiles_row.len() != num_cols {
                return Err(BoardError::Shape {
                    row,
                    len: tiles_row.len(),
                    expected: num_cols,
                });
            }
        }

        for (row, tiles_row) in tiles.iter().enumerate() {
            for (col, tile) in tiles_row.iter().enumerate() {
                let slot = Point::new(row as i32, col as i32);
                if tile.position() != slot {
                    return Err(BoardError::PositionMismatch {
                        slot,
                        found: tile.position(),
                    });
                }
            }
        }

        let mut targets: BTreeMap<String, Vec<Point>> = BTreeMap::new();
        for tile in tiles.iter().flatten() {
            if let Some(name) = tile.target() {
                if !robot_map.contains_key(name) {
                    return Err(BoardError::UnknownTargetRobot {
                        name: name.to_owned(),
                        position: tile.position(),
                    });
                }
                targets.entry(name.to_owned()).or_default().push(tile.position());
            }
        }

        Ok(Self {
            num_rows,
            num_cols,
            tiles,
            robots: robot_map,
            targets,
        })
    }

    /// The standard board without interior walls: every tile accessible, every edge between two
    /// neighboring tiles open from both sides, the perimeter closed.
    pub fn open(num_rows: usize, num_cols: usize, robots: Vec<Robot>) -> Result<Self, BoardError> {
        let tiles = (0..num_rows)
            .map(|row| {
                (0..num_cols)
                    .map(|col| {
                        let position = Point::new(row as i32, col as i32);
                        let gaps = Direction::iter()
                            .copied()
                            .filter(|direction| {
                                in_grid(num_rows, num_cols, position.moved(*direction))
                            })
                            .collect();
                        Tile::new(position.row(), position.col()).with_gaps(gaps)
                    })
                    .collect()
            })
            .collect();
        Board::new(robots, tiles)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn contains(&self, point: Point) -> bool {
        in_grid(self.num_rows, self.num_cols, point)
    }

    pub fn tile(&self, point: Point) -> Option<&Tile> {
        if self.contains(point) {
            Some(&self.tiles[point.row() as usize][point.col() as usize])
        } else {
            None
        }
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn robot(&self, name: &str) -> Option<&Robot> {
        self.robots.get(name)
    }

    pub fn robots(&self) -> impl Iterator<Item = &Robot> {
        self.robots.values()
    }

    /// The target tiles of the named robot, in the row-major order of the grid scan.
    pub fn targets(&self, name: &str) -> &[Point] {
        self.targets.get(name).map_or(&[], Vec::as_slice)
    }

    /// True when a robot cannot enter `tile` right now, because the tile is inaccessible or a
    /// robot stands on it. The stopping condition for sliding.
    pub fn blocked(&self, tile: &Tile) -> bool {
        let tile = self.owned(tile);
        !tile.accessible()
            || self
                .robots
                .values()
                .any(|robot| robot.tile() == Some(tile.position()))
    }

    /// True when a robot standing on `tile` can take exactly one step toward `direction` right
    /// now. Folds the wall topology, the grid boundary and the live occupancy, so the answer
    /// changes as robots move.
    pub fn connected(&self, tile: &Tile, direction: Direction) -> bool {
        let tile = self.owned(tile);
        if !tile.accessible() || !tile.gap_toward(direction) {
            return false;
        }
        match self.tile(tile.position().moved(direction)) {
            Some(destination) => !self.blocked(destination),
            None => false,
        }
    }

    /// The terminal tile of a slide from `tile` toward `direction`. A slide that cannot take
    /// its first step terminates on its starting tile.
    pub fn destination(&self, tile: &Tile, direction: Direction) -> &Tile {
        let mut current = self.owned(tile);
        while let Some(next) = self.step(current, direction) {
            current = next;
        }
        current
    }

    /// The distinct slide destinations from `tile` over all four directions. Includes the
    /// starting tile itself when some direction cannot move at all.
    pub fn reachable(&self, tile: &Tile) -> Vec<&Tile> {
        let mut destinations: Vec<&Tile> = Vec::new();
        for direction in Direction::iter() {
            let destination = self.destination(tile, *direction);
            if !destinations
                .iter()
                .any(|seen| seen.position() == destination.position())
            {
                destinations.push(destination);
            }
        }
        destinations
    }

    /// Puts the named robot on the given tile. Re-placing a robot, including onto its own
    /// current tile, is allowed.
    pub fn place_robot(&mut self, name: &str, point: Point) -> Result<(), BoardError> {
        if !self.robots.contains_key(name) {
            return Err(BoardError::UnknownRobot(name.to_owned()));
        }
        let accessible = self
            .tile(point)
            .map(Tile::accessible)
            .ok_or(BoardError::OutOfBounds(point))?;
        let occupied = self
            .robots
            .values()
            .any(|robot| robot.name() != name && robot.tile() == Some(point));
        if !accessible || occupied {
            return Err(BoardError::TileBlocked(point));
        }
        if let Some(robot) = self.robots.get_mut(name) {
            robot.set_tile(point);
        }
        Ok(())
    }

    /// Slides the named robot until the next step is disallowed and commits the terminal
    /// position, returning it. A robot that cannot move stays put; that is not an error.
    pub fn slide_robot(&mut self, name: &str, direction: Direction) -> Result<Point, BoardError> {
        let robot = self
            .robots
            .get(name)
            .ok_or_else(|| BoardError::UnknownRobot(name.to_owned()))?;
        let start = robot
            .tile()
            .ok_or_else(|| BoardError::UnplacedRobot(name.to_owned()))?;
        let end = self
            .tile(start)
            .map_or(start, |tile| self.destination(tile, direction).position());
        if let Some(robot) = self.robots.get_mut(name) {
            robot.set_tile(end);
        }
        Ok(end)
    }

    /// Places every robot on a random vacant accessible tile, drawn uniformly with `rng`. The
    /// placements are pairwise distinct; the board is left untouched when it cannot hold all
    /// robots.
    pub fn scatter_robots_with(&mut self, rng: &mut impl Rng) -> Result<(), BoardError> {
        let mut placements: Vec<(String, Point)> = Vec::new();
        for name in self.robots.keys() {
            let vacant = self
                .tiles
                .iter()
                .flatten()
                .filter(|tile| tile.accessible())
                .map(Tile::position)
                .filter(|position| !placements.iter().any(|(_, taken)| taken == position))
                .collect::<Vec<_>>();
            if vacant.is_empty() {
                return Err(BoardError::NoVacantTile);
            }
            placements.push((name.clone(), vacant[rng.random_range(0..vacant.len())]));
        }
        for (name, position) in placements {
            if let Some(robot) = self.robots.get_mut(&name) {
                robot.set_tile(position);
            }
        }
        Ok(())
    }

    /// Like [`Board::scatter_robots_with`] with the thread RNG.
    pub fn scatter_robots(&mut self) -> Result<(), BoardError> {
        self.scatter_robots_with(&mut rand::rng())
    }

    fn step(&self, tile: &Tile, direction: Direction) -> Option<&Tile> {
        if self.connected(tile, direction) {
            self.tile(tile.position().moved(direction))
        } else {
            None
        }
    }

    /// The board's own tile for `tile`'s position. Passing a tile that does not belong to this
    /// board is a precondition violation and fails fast.
    fn owned(&self, tile: &Tile) -> &Tile {
        match self.tile(tile.position()) {
            Some(owned) if owned == tile => owned,
            _ => panic!(
                "tile at {:?} does not belong to this board",
                tile.position()
            ),
        }
    }
}

fn in_grid(num_rows: usize, num_cols: usize, point: Point) -> bool {
    point.row() >= 0
        && point.row() < num_rows as i32
        && point.col() >= 0
        && point.col() < num_cols as i32
}

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("grid has no tiles")]
    EmptyGrid,
    #[error("row {row} has {len} tiles, expected {expected}")]
    Shape {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("tile stored as {found:?} occupies grid slot {slot:?}")]
    PositionMismatch { slot: Point, found: Point },
    #[error("target at {position:?} names unknown robot {name:?}")]
    UnknownTargetRobot { name: String, position: Point },
    #[error("duplicate robot {0:?}")]
    DuplicateRobot(String),
    #[error("unknown robot {0:?}")]
    UnknownRobot(String),
    #[error("robot {0:?} is not placed on the board")]
    UnplacedRobot(String),
    #[error("{0:?} is outside the grid")]
    OutOfBounds(Point),
    #[error("tile at {0:?} is blocked")]
    TileBlocked(Point),
    #[error("no vacant tile left for a robot")]
    NoVacantTile,
}
