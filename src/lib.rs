//! Board model for a grid sliding puzzle in the style of Ricochet Robots.
//!
//! A rectangular grid of [`Tile`]s, some impassable, connected to their neighbors through
//! directional wall gaps, carries named [`Robot`]s that slide in a chosen direction until a wall
//! or another robot stops them. The [`Board`] owns the grid and resolves all movement; robots
//! hold plain coordinates into it. Everything but robot occupancy is immutable after
//! construction, so a board can be shared read-only across threads as long as mutation stays
//! with a single writer.


mod domain;

pub use domain::{Board, BoardError, Direction, DirectionSet, Point, Robot, Tile};
