//! Grid coordinates.

use std::fmt;
use std::ops::{Add, Sub};

/// A cell position in a maze. Rows grow downward, columns grow rightward.
///
/// Coordinates are signed so that neighbours of edge cells can be formed and
/// then rejected by a bounds check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a location shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in the order up, down, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Location; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order.
impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Location {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Location {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_arithmetic() {
        let a = Location::new(1, 2);
        let b = Location::new(3, 5);
        assert_eq!(a + b, Location::new(4, 7));
        assert_eq!(b - a, Location::new(2, 3));
        assert_eq!(a.shift(-1, 1), Location::new(0, 3));
    }

    #[test]
    fn neighbors_are_up_down_left_right() {
        let n = Location::new(0, 0).neighbors_4();
        assert_eq!(
            n,
            [
                Location::new(-1, 0),
                Location::new(1, 0),
                Location::new(0, -1),
                Location::new(0, 1),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut locs = vec![Location::new(1, 0), Location::new(0, 2), Location::new(0, 1)];
        locs.sort();
        assert_eq!(
            locs,
            vec![Location::new(0, 1), Location::new(0, 2), Location::new(1, 0)]
        );
        assert_eq!(Location::new(2, 3).to_string(), "(2, 3)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn location_round_trip() {
        let loc = Location::new(3, 7);
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
