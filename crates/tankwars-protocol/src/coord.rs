use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset coordinates on the hex grid (column `x`, row `y`).
///
/// Odd rows are shifted half a tile to the right, so the neighbor offsets
/// depend on the parity of `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// The six neighbor directions, in the order `Coord::neighbors` yields them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::Left,
    ];
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row parity: 1 for shifted rows, 0 otherwise.
    #[inline]
    fn parity(self) -> i32 {
        self.y.rem_euclid(2)
    }

    pub fn step(self, direction: Direction) -> Coord {
        let p = self.parity();
        let (x, y) = (self.x, self.y);
        match direction {
            Direction::TopLeft => Coord::new(x - 1 + p, y - 1),
            Direction::TopRight => Coord::new(x + p, y - 1),
            Direction::Right => Coord::new(x + 1, y),
            Direction::BottomRight => Coord::new(x + p, y + 1),
            Direction::BottomLeft => Coord::new(x - 1 + p, y + 1),
            Direction::Left => Coord::new(x - 1, y),
        }
    }

    /// The six adjacent coordinates. No bounds checking: callers resolve
    /// them against a world.
    pub fn neighbors(self) -> [Coord; 6] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Axial `(q, r)` form of this offset coordinate. `y - (y & 1)` is always
    /// even, so the division is exact for negative rows too.
    #[inline]
    fn axial(self) -> (i32, i32) {
        (self.x - (self.y - (self.y & 1)) / 2, self.y)
    }

    /// Exact hex distance (minimum number of neighbor steps on an unbounded grid).
    pub fn distance(self, other: Coord) -> i32 {
        let (aq, ar) = self.axial();
        let (bq, br) = other.axial();
        let dq = aq - bq;
        let dr = ar - br;
        let ds = -dq - dr;
        (dq.abs() + dr.abs() + ds.abs()) / 2
    }

    pub fn is_neighbor(self, other: Coord) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[i32; 2]> for Coord {
    fn from([x, y]: [i32; 2]) -> Self {
        Coord::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_row_neighbors_follow_offset_layout() {
        let n = Coord::new(2, 2).neighbors();
        assert_eq!(
            n,
            [
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(3, 2),
                Coord::new(2, 3),
                Coord::new(1, 3),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn odd_row_neighbors_are_shifted_right() {
        let n = Coord::new(2, 1).neighbors();
        assert_eq!(
            n,
            [
                Coord::new(2, 0),
                Coord::new(3, 0),
                Coord::new(3, 1),
                Coord::new(3, 2),
                Coord::new(2, 2),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn distance_matches_known_values() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.distance(origin), 0);
        assert_eq!(origin.distance(Coord::new(3, 0)), 3);
        assert_eq!(origin.distance(Coord::new(0, 2)), 2);
        assert_eq!(origin.distance(Coord::new(1, 2)), 2);
        assert_eq!(origin.distance(Coord::new(0, 1)), 1);
        assert_eq!(Coord::new(2, 2).distance(Coord::new(2, 1)), 1);
    }

    #[test]
    fn coord_from_pair() {
        assert_eq!(Coord::from([4, 7]), Coord::new(4, 7));
    }
}
