use std::fmt;

/// A row/column coordinate.
///
/// Locations are plain values and carry no bounds information: `adjacent`
/// happily produces coordinates outside any board. Whether a location names
/// a real square is the board's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: i8,
    pub col: i8,
}

impl Location {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The location one step away in the given direction.
    pub fn adjacent(self, dir: Direction) -> Location {
        let (dr, dc) = dir.delta();
        Location {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight compass directions, 45 degrees apart.
///
/// North points toward row 0, the side White advances toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    /// The four rook directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::Northeast,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Northwest,
    ];

    /// Row/column deltas for one step in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::Northeast => (-1, 1),
            Direction::East => (0, 1),
            Direction::Southeast => (1, 1),
            Direction::South => (1, 0),
            Direction::Southwest => (1, -1),
            Direction::West => (0, -1),
            Direction::Northwest => (-1, -1),
        }
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod location_tests;
