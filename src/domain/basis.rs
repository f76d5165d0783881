//! Basic building blocks.

use std::{ops::BitOr, slice::Iter};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ];
        DIRECTIONS.iter()
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }

    /// The two directions orthogonal to `self`, in a fixed order.
    pub const fn perp(self) -> (Direction, Direction) {
        match self {
            Direction::Right | Direction::Left => (Direction::Up, Direction::Down),
            Direction::Up | Direction::Down => (Direction::Left, Direction::Right),
        }
    }

    /// One step as `(row delta, col delta)`. Rows grow downward, columns grow rightward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
        }
    }

    /// The bit representing this direction in a packed wall mask.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Left => 4,
            Direction::Down => 8,
        }
    }
}

impl BitOr for Direction {
    type Output = DirectionSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        DirectionSet(self.bit() | rhs.bit())
    }
}

/// A set of directions packed into the low four bits of a byte. Renderers index their glyph
/// tables with [`DirectionSet::bits`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::iter()
            .copied()
            .filter(move |direction| self.contains(*direction))
    }
}

impl From<Direction> for DirectionSet {
    fn from(value: Direction) -> Self {
        DirectionSet(value.bit())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(DirectionSet::EMPTY, |set, direction| set | direction)
    }
}

impl BitOr<Direction> for DirectionSet {
    type Output = DirectionSet;

    fn bitor(self, rhs: Direction) -> Self::Output {
        DirectionSet(self.0 | rhs.bit())
    }
}

impl BitOr for DirectionSet {
    type Output = DirectionSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        DirectionSet(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    row: i32,
    col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// The neighboring coordinate one step toward `direction`. Does not check any bounds.
    pub const fn moved(self, direction: Direction) -> Point {
        let (row_delta, col_delta) = direction.offset();
        Point::new(self.row + row_delta, self.col + col_delta)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::right(Direction::Right, Direction::Left)]
    #[case::up(Direction::Up, Direction::Down)]
    #[case::left(Direction::Left, Direction::Right)]
    #[case::down(Direction::Down, Direction::Up)]
    fn test_direction_opposite(#[case] direction: Direction, #[case] expected: Direction) {
        assert_eq!(direction.opposite(), expected);
        assert_eq!(direction.opposite().opposite(), direction);
    }

    #[rstest]
    #[case::right(Direction::Right, (Direction::Up, Direction::Down))]
    #[case::up(Direction::Up, (Direction::Left, Direction::Right))]
    #[case::left(Direction::Left, (Direction::Up, Direction::Down))]
    #[case::down(Direction::Down, (Direction::Left, Direction::Right))]
    fn test_direction_perp(#[case] direction: Direction, #[case] expected: (Direction, Direction)) {
        assert_eq!(direction.perp(), expected);
        assert!(expected.0 != direction && expected.0 != direction.opposite());
        assert!(expected.1 != direction && expected.1 != direction.opposite());
    }

    #[test]
    fn test_direction_offsets_are_distinct_unit_steps() {
        let offsets = Direction::iter()
            .map(|direction| direction.offset())
            .collect::<Vec<_>>();
        for (idx, (row_delta, col_delta)) in offsets.iter().enumerate() {
            assert_eq!(row_delta.abs() + col_delta.abs(), 1);
            assert!(!offsets[idx + 1..].contains(&(*row_delta, *col_delta)));
        }
    }

    #[rstest]
    #[case::right(Direction::Right, 1)]
    #[case::up(Direction::Up, 2)]
    #[case::left(Direction::Left, 4)]
    #[case::down(Direction::Down, 8)]
    fn test_direction_bit(#[case] direction: Direction, #[case] expected: u8) {
        assert_eq!(direction.bit(), expected);
    }

    #[test]
    fn test_direction_set_collects_bits() {
        let set = Direction::Right | Direction::Down;
        assert!(set.contains(Direction::Right));
        assert!(set.contains(Direction::Down));
        assert!(!set.contains(Direction::Up));
        assert!(!set.contains(Direction::Left));
        assert_eq!(set.bits(), 9);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_direction_set_iterates_in_declaration_order() {
        assert_eq!(
            DirectionSet::ALL.iter().collect::<Vec<_>>(),
            vec![
                Direction::Right,
                Direction::Up,
                Direction::Left,
                Direction::Down
            ]
        );
    }

    #[test]
    fn test_direction_set_from_iterator() {
        assert_eq!(
            Direction::iter().copied().collect::<DirectionSet>(),
            DirectionSet::ALL
        );
        assert!(DirectionSet::EMPTY.is_empty());
        assert_eq!(DirectionSet::default(), DirectionSet::EMPTY);
    }

    #[rstest]
    #[case::right(Direction::Right, Point::new(2, 4))]
    #[case::up(Direction::Up, Point::new(1, 3))]
    #[case::left(Direction::Left, Point::new(2, 2))]
    #[case::down(Direction::Down, Point::new(3, 3))]
    fn test_point_moved(#[case] direction: Direction, #[case] expected: Point) {
        let point = Point::new(2, 3);
        assert_eq!(point.moved(direction), expected);
        assert_eq!(point.moved(direction).moved(direction.opposite()), point);
    }
}
