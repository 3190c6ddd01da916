use crate::geom::Location;

/// Straight-line (L2) distance between two locations.
#[inline]
pub fn euclidean(a: Location, b: Location) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> f64 {
    f64::from((a.row - b.row).abs() + (a.col - b.col).abs())
}

/// Heuristic toward `goal` using [`euclidean`]. Admissible for 4-directional
/// unit-cost movement.
pub fn euclidean_distance(goal: Location) -> impl Fn(&Location) -> f64 {
    move |loc: &Location| euclidean(*loc, goal)
}

/// Heuristic toward `goal` using [`manhattan`]. Admissible and exact on an
/// open grid with 4-directional unit-cost movement.
pub fn manhattan_distance(goal: Location) -> impl Fn(&Location) -> f64 {
    move |loc: &Location| manhattan(*loc, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Location::new(0, 0);
        let b = Location::new(3, 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(euclidean(b, b), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let goal = Location::new(2, 2);
        let h = euclidean_distance(goal);
        let m = manhattan_distance(goal);
        for row in -3..6 {
            for col in -3..6 {
                let loc = Location::new(row, col);
                assert!(h(&loc) <= m(&loc));
            }
        }
    }
}
