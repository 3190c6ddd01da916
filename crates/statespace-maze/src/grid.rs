//! Row-major storage for maze cells.

use crate::cell::Cell;
use crate::geom::Location;

/// A rectangular grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    columns: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid filled with [`Cell::Empty`].
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, columns: i32) -> Self {
        let rows = rows.max(0);
        let columns = columns.max(0);
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows as usize * columns as usize],
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Whether the grid contains the given location.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row >= 0 && loc.row < self.rows && loc.col >= 0 && loc.col < self.columns
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        loc.row as usize * self.columns as usize + loc.col as usize
    }

    /// Get the cell at a location, or `None` if out of bounds.
    pub fn at(&self, loc: Location) -> Option<Cell> {
        if !self.contains(loc) {
            return None;
        }
        Some(self.cells[self.index(loc)])
    }

    /// Set the cell at a location. Does nothing if out of bounds.
    pub fn set(&mut self, loc: Location, cell: Cell) {
        if !self.contains(loc) {
            return;
        }
        let idx = self.index(loc);
        self.cells[idx] = cell;
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Apply a transformation to every cell.
    pub fn map_cells(&mut self, mut f: impl FnMut(Location, Cell) -> Cell) {
        let columns = self.columns as usize;
        for (i, c) in self.cells.iter_mut().enumerate() {
            let loc = Location::new((i / columns) as i32, (i % columns) as i32);
            *c = f(loc, *c);
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over every location in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Location> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| Location::new(row, col)))
    }

    /// Iterate over one row of cells. Empty if `row` is out of range.
    pub fn row(&self, row: i32) -> &[Cell] {
        if row < 0 || row >= self.rows {
            return &[];
        }
        let columns = self.columns as usize;
        let start = row as usize * columns;
        &self.cells[start..start + columns]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.columns(), 4);
        assert_eq!(g.count(Cell::Empty), 12);
    }

    #[test]
    fn test_at_and_set() {
        let mut g = Grid::new(2, 2);
        g.set(Location::new(1, 0), Cell::Blocked);
        assert_eq!(g.at(Location::new(1, 0)), Some(Cell::Blocked));
        assert_eq!(g.at(Location::new(0, 1)), Some(Cell::Empty));
        assert_eq!(g.at(Location::new(2, 0)), None);
        assert_eq!(g.at(Location::new(0, -1)), None);

        // Out-of-bounds set is ignored.
        g.set(Location::new(5, 5), Cell::Goal);
        assert_eq!(g.count(Cell::Goal), 0);
    }

    #[test]
    fn test_positions_row_major() {
        let g = Grid::new(2, 3);
        let p: Vec<Location> = g.positions().collect();
        assert_eq!(p.len(), 6);
        assert_eq!(p[0], Location::new(0, 0));
        assert_eq!(p[3], Location::new(1, 0));
        assert_eq!(p[5], Location::new(1, 2));
    }

    #[test]
    fn test_map_cells_sees_locations() {
        let mut g = Grid::new(3, 3);
        g.map_cells(|loc, c| if loc.row == loc.col { Cell::Blocked } else { c });
        assert_eq!(g.count(Cell::Blocked), 3);
        assert_eq!(g.row(1), &[Cell::Empty, Cell::Blocked, Cell::Empty]);
        assert!(g.row(3).is_empty());
    }

    #[test]
    fn test_fill_and_negative_dimensions() {
        let mut g = Grid::new(2, 2);
        g.fill(Cell::Blocked);
        assert_eq!(g.count(Cell::Blocked), 4);

        let empty = Grid::new(-1, 5);
        assert_eq!(empty.rows(), 0);
        assert_eq!(empty.positions().count(), 0);
        assert!(!empty.contains(Location::ORIGIN));
    }

    #[test]
    fn test_tall_grid_indexing() {
        let g = Grid::new(50_000, 2);
        let last = Location::new(49_999, 1);
        assert_eq!(g.at(last), Some(Cell::Empty));
        assert_eq!(g.row(49_999).len(), 2);
        assert_eq!(g.positions().last(), Some(last));
    }
}
