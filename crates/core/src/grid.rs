//! Grid module - the N×N color table
//!
//! The grid is stored as a flat row-major buffer (`row * size + col`).
//! Rows are contiguous slices and rotate in place; columns are gathered into a
//! fixed-capacity buffer, rotated, and written back, so no move allocates.
//!
//! Public row/column indices are signed so that callers handing in a negative
//! index get [`PuzzleError::IndexOutOfRange`] instead of a wrapped value.

use std::fmt;

use arrayvec::ArrayVec;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::PuzzleError;
use crate::types::{Arrow, Axis, Color, Shift, MAX_GRID_SIZE, MIN_GRID_SIZE, PALETTE};

/// One line (row or column) of the grid, copied out in reading order
pub type Line = ArrayVec<Color, MAX_GRID_SIZE>;

/// The puzzle grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPuzzle {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Color>,
}

impl GridPuzzle {
    /// Build a shuffled, unsolved grid using thread-local entropy.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        Self::with_rng(size, &mut rand::thread_rng())
    }

    /// Build a shuffled, unsolved grid from a fixed seed.
    ///
    /// The same `(size, seed)` pair always produces the same grid.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, PuzzleError> {
        Self::with_rng(size, &mut StdRng::seed_from_u64(seed))
    }

    /// Build a shuffled, unsolved grid drawing randomness from `rng`.
    ///
    /// Starts with row `i` filled with `PALETTE[i]` and reshuffles all N²
    /// cells until the result is not solved.
    pub fn with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        check_size(size)?;

        let mut puzzle = Self::striped(size);
        let mut attempts = 0u32;
        while puzzle.is_solved() {
            puzzle.cells.shuffle(rng);
            attempts += 1;
        }

        debug!("built {size}x{size} grid after {attempts} shuffle(s)");
        Ok(puzzle)
    }

    /// Build a grid from explicit rows without shuffling.
    ///
    /// The row count is the grid size. Every row must have that many cells and
    /// only use colors from the palette for that size. The result may already
    /// be solved.
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> Result<Self, PuzzleError> {
        let size = rows.len();
        check_size(size)?;

        let palette = palette_for(size);
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != size {
                return Err(PuzzleError::RaggedRow {
                    row,
                    len: line.len(),
                    size,
                });
            }
            for (col, &color) in line.iter().enumerate() {
                if !palette.contains(&color) {
                    return Err(PuzzleError::ForeignColor {
                        row,
                        col,
                        color,
                        size,
                    });
                }
                cells.push(color);
            }
        }

        Ok(Self { size, cells })
    }

    /// Unshuffled layout: row `i` is entirely `PALETTE[i]`.
    fn striped(size: usize) -> Self {
        let cells = palette_for(size)
            .iter()
            .flat_map(|&color| std::iter::repeat(color).take(size))
            .collect();
        Self { size, cells }
    }

    /// Grid edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Colors in play for this grid, in palette order
    pub fn palette(&self) -> &'static [Color] {
        palette_for(self.size)
    }

    /// Get the color at `(row, col)`
    pub fn color_at(&self, row: i32, col: i32) -> Result<Color, PuzzleError> {
        let row = self.check_index(row)?;
        let col = self.check_index(col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Row `row`, left to right. None if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        (row < self.size).then(|| self.row_slice(row))
    }

    /// Column `col`, top to bottom. None if out of bounds.
    pub fn column(&self, col: usize) -> Option<impl Iterator<Item = Color> + '_> {
        (col < self.size).then(|| self.column_iter(col))
    }

    /// Copy out one row (left to right) or column (top to bottom).
    ///
    /// Returns None if `index` is out of bounds.
    pub fn line(&self, axis: Axis, index: usize) -> Option<Line> {
        match axis {
            Axis::Row => self.row(index).map(|row| row.iter().copied().collect()),
            Axis::Column => self.column(index).map(|column| column.collect()),
        }
    }

    /// Rotate one row or column cyclically by one position.
    ///
    /// Only the cells on that line change. An out-of-range index is rejected
    /// before anything is touched.
    pub fn rotate(&mut self, axis: Axis, index: i32, shift: Shift) -> Result<(), PuzzleError> {
        let index = self.check_index(index)?;
        let size = self.size;

        match axis {
            Axis::Row => {
                let start = index * size;
                rotate_line(&mut self.cells[start..start + size], shift);
            }
            Axis::Column => {
                let mut column: Line = self.column_iter(index).collect();
                rotate_line(&mut column, shift);
                for (row, color) in column.into_iter().enumerate() {
                    self.cells[row * size + index] = color;
                }
            }
        }

        trace!("rotated {axis:?} {index} {shift:?}");
        Ok(())
    }

    /// Apply an arrow button press to row/column `index`.
    ///
    /// Up/Down act on column `index`, Left/Right on row `index`.
    pub fn apply(&mut self, arrow: Arrow, index: i32) -> Result<(), PuzzleError> {
        self.rotate(arrow.axis(), index, arrow.shift())
    }

    /// Solved when every row is single-colored OR every column is single-colored.
    pub fn is_solved(&self) -> bool {
        self.rows_uniform() || self.columns_uniform()
    }

    /// True if each row holds a single color
    pub fn rows_uniform(&self) -> bool {
        self.rows().all(is_uniform)
    }

    /// True if each column holds a single color
    pub fn columns_uniform(&self) -> bool {
        (0..self.size).all(|col| {
            let top = self.cells[col];
            self.column_iter(col).all(|color| color == top)
        })
    }

    fn row_slice(&self, row: usize) -> &[Color] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    fn column_iter(&self, col: usize) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    fn check_index(&self, index: i32) -> Result<usize, PuzzleError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.size)
            .ok_or(PuzzleError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }
}

impl fmt::Display for GridPuzzle {
    /// One line per row, colors as letters separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, color) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", color.letter())?;
            }
        }
        Ok(())
    }
}

fn palette_for(size: usize) -> &'static [Color] {
    let palette: &'static [Color; MAX_GRID_SIZE] = &PALETTE;
    &palette[..size]
}

fn check_size(size: usize) -> Result<(), PuzzleError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(PuzzleError::InvalidSize {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

#[inline]
fn rotate_line(line: &mut [Color], shift: Shift) {
    match shift {
        Shift::Forward => line.rotate_right(1),
        Shift::Backward => line.rotate_left(1),
    }
}

fn is_uniform(line: &[Color]) -> bool {
    line.windows(2).all(|pair| pair[0] == pair[1])
}
