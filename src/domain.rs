//! The domain module encapsulates the core game logic. It defines the `Tile`, `Robot` and
//! `Board` entities, along with the rules governing robot movement across the grid.
//!
//! By minimizing hard dependencies, this module ensures the board logic remains adaptable and
//! independent of specific implementation details.

mod basis;
mod board;
mod robot;
mod tile;

pub use basis::{Direction, DirectionSet, Point};
pub use board::{Board, BoardError};
pub use robot::Robot;
pub use tile::Tile;
