//! Fixed-size 2D board storage shared by every rule engine.

use std::ops::{Index, IndexMut};

use crate::error::GridError;

/// A `rows x cols` grid stored row-major.
///
/// The extent is fixed at construction. `at`/`at_mut` and indexing panic on
/// out-of-range coordinates; `get`/`get_mut` return a [`GridError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn reset(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let idx = self.offset(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Bounds-checked access. Panics on out-of-range coordinates.
    pub fn at(&self, row: usize, col: usize) -> &T {
        match self.get(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Bounds-checked mutable access. Panics on out-of-range coordinates.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        match self.offset(row, col) {
            Ok(idx) => &mut self.cells[idx],
            Err(err) => panic!("{err}"),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Iterate `((row, col), &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / cols, i % cols), cell))
    }

    /// Coordinates of every cell matching `pred`, row-major.
    pub fn positions<F>(&self, mut pred: F) -> Vec<(usize, usize)>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|(_, cell)| pred(cell))
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_filled() {
        let grid = Grid::new(2, 3, 7u8);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.iter().all(|(_, &v)| v == 7));
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid = Grid::new(2, 3, 0u32);
        grid[(1, 2)] = 5;
        let positions = grid.positions(|&v| v == 5);
        assert_eq!(positions, vec![(1, 2)]);
        assert_eq!(grid.iter().nth(5), Some(((1, 2), &5)));
    }

    #[test]
    fn test_get_out_of_range_is_error() {
        let grid = Grid::new(3, 3, 0u8);
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::IndexOutOfRange {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(grid.get(0, 3).is_err());
        assert!(grid.get(2, 2).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_at_panics_out_of_range() {
        let grid = Grid::new(3, 3, 0u8);
        let _ = grid.at(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_mut_panics_out_of_range() {
        let mut grid = Grid::new(4, 4, 0u32);
        grid[(4, 1)] = 2;
    }

    #[test]
    fn test_reset_fills_every_cell() {
        let mut grid = Grid::new(4, 4, 0u32);
        *grid.at_mut(1, 1) = 8;
        *grid.get_mut(3, 0).unwrap() = 16;
        grid.reset(2);
        assert!(grid.iter().all(|(_, &v)| v == 2));
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(9, 9, false);
        assert!(grid.contains(8, 8));
        assert!(!grid.contains(9, 0));
        assert!(!grid.contains(0, 9));
    }
}
