//! Board module - the validated 4x4 grid
//!
//! The board wraps a row-major [`Grid`] and can only be built through
//! validating constructors, so every cell is 0 or a power of two.
//! Coordinates: `(row, col)`, both in `0..4`, row 0 at the top.
//!
//! Lines are read and written in *traversal order*: the order in which tiles
//! slide toward index 0. For Right and Down this is the reversed row/column,
//! which lets the merge logic always work "toward the front".

use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::types::{
    self, is_tile_value, Direction, EngineError, Grid, BOARD_SIZE, CELL_COUNT, EMPTY_GRID,
};

/// One row or column in traversal order
pub type Line = [u32; BOARD_SIZE];

/// The game board - 4x4 cells of tile values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self { cells: EMPTY_GRID }
    }

    /// Build a board from untrusted rows.
    ///
    /// Rejects a wrong number of rows, a wrong row length, negative values and
    /// values that are not powers of two. The error names the first offending
    /// row or cell. Stops reading after one row too many.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i64]>,
    {
        let mut cells = EMPTY_GRID;
        let mut count = 0usize;

        for (row, values) in rows.into_iter().take(BOARD_SIZE + 1).enumerate() {
            count += 1;
            if row >= BOARD_SIZE {
                break;
            }
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(EngineError::RowLength {
                    row,
                    expected: BOARD_SIZE,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                cells[row][col] = value as u32;
            }
        }

        if count != BOARD_SIZE {
            return Err(EngineError::RowCount {
                expected: BOARD_SIZE,
                actual: count,
            });
        }

        Ok(Self { cells })
    }

    /// Copy of the underlying grid
    pub fn grid(&self) -> Grid {
        self.cells
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Place a tile in an empty cell.
    ///
    /// Only called by the spawner, which guarantees an empty in-bounds cell
    /// and a valid tile value.
    pub(crate) fn place(&mut self, row: usize, col: usize, value: u32) {
        debug_assert_eq!(self.cells[row][col], 0);
        debug_assert!(is_tile_value(value as i64));
        self.cells[row][col] = value;
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        types::max_tile(&self.cells)
    }

    /// Read line `index` in traversal order for `dir`
    pub fn read_line(&self, dir: Direction, index: usize) -> Line {
        let mut line = [0; BOARD_SIZE];
        for (j, slot) in line.iter_mut().enumerate() {
            let (r, c) = Self::line_coord(dir, index, j);
            *slot = self.cells[r][c];
        }
        line
    }

    /// Write line `index` back in traversal order for `dir`
    pub(crate) fn write_line(&mut self, dir: Direction, index: usize, line: Line) {
        for (j, &v) in line.iter().enumerate() {
            let (r, c) = Self::line_coord(dir, index, j);
            self.cells[r][c] = v;
        }
    }

    /// Map the `j`-th element of line `index` to a grid coordinate
    #[inline(always)]
    fn line_coord(dir: Direction, index: usize, j: usize) -> (usize, usize) {
        let along = if dir.is_reversed() {
            BOARD_SIZE - 1 - j
        } else {
            j
        };
        if dir.is_horizontal() {
            (index, along)
        } else {
            (along, index)
        }
    }
}

impl TryFrom<Grid> for Board {
    type Error = EngineError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value as i64) {
                    return Err(EngineError::InvalidTile {
                        row,
                        col,
                        value: value as i64,
                    });
                }
            }
        }
        Ok(Self { cells: grid })
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse a textual grid.
    ///
    /// Rows are separated by `/` or `;`, cells by `,` or whitespace:
    /// `"2,2,0,0/0,0,0,0/0,0,0,0/0,0,0,4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<i64>> = Vec::with_capacity(BOARD_SIZE);
        for row in s.split(['/', ';']) {
            let row = row.trim();
            if row.is_empty() {
                continue;
            }
            let cells = row
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .map(|cell| {
                    cell.parse::<i64>()
                        .map_err(|_| EngineError::ParseCell(cell.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Board {
        // Distinct powers of two so every coordinate is identifiable.
        let mut grid = EMPTY_GRID;
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = 1 << (1 + r * BOARD_SIZE + c);
            }
        }
        Board::try_from(grid).unwrap()
    }

    #[test]
    fn read_line_follows_traversal_order() {
        let b = numbered();
        assert_eq!(b.read_line(Direction::Left, 1), [32, 64, 128, 256]);
        assert_eq!(b.read_line(Direction::Right, 1), [256, 128, 64, 32]);
        assert_eq!(b.read_line(Direction::Up, 2), [8, 128, 2048, 32768]);
        assert_eq!(b.read_line(Direction::Down, 2), [32768, 2048, 128, 8]);
    }

    #[test]
    fn write_line_is_inverse_of_read_line() {
        let original = numbered();
        for dir in Direction::ALL {
            for i in 0..BOARD_SIZE {
                let mut b = original;
                let line = b.read_line(dir, i);
                b.write_line(dir, i, line);
                assert_eq!(b, original, "{dir} line {i}");
            }
        }
    }

    #[test]
    fn write_line_right_fills_from_the_right_edge() {
        let mut b = Board::new();
        b.write_line(Direction::Right, 0, [4, 2, 0, 0]);
        assert_eq!(b.grid()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn empty_cells_row_major() {
        let mut b = numbered();
        b.cells[0][3] = 0;
        b.cells[2][1] = 0;
        assert_eq!(b.empty_cells().as_slice(), &[(0, 3), (2, 1)]);
        assert!(!b.is_full());
        assert!(numbered().is_full());
    }

    #[test]
    fn place_sets_value() {
        let mut b = Board::new();
        b.place(3, 1, 4);
        assert_eq!(b.get(3, 1), Some(4));
        assert_eq!(b.get(4, 0), None);
        assert_eq!(b.max_tile(), 4);
    }
}
