//! Wall/passage grid shared by the generator, the solver and any renderer
//!
//! Logical cells (the carvable rooms) sit at odd grid coordinates; every other
//! grid cell is either a border wall or the wall between two adjacent rooms.
//! Only the generator may carve a grid, so a finished maze is immutable to callers.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{MazeError, Result};
use crate::maze::direction::Direction;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Impassable cell
    #[default]
    Wall,
    /// Open cell a path may cross
    Passage,
}

impl Cell {
    /// Exchange-format value: `1` for walls, `0` for passages
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Wall => 1,
            Self::Passage => 0,
        }
    }

    /// Test whether the cell is open
    pub const fn is_passage(self) -> bool {
        matches!(self, Self::Passage)
    }
}

/// Position in grid space, `x` being the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Grid coordinate of the centre of logical cell `(cx, cy)`
    pub const fn from_logical(cx: usize, cy: usize) -> Self {
        Self {
            x: 2 * cx + 1,
            y: 2 * cy + 1,
        }
    }

    /// Index into a row-major `Array2` (`[row, col]`)
    pub const fn array_index(self) -> [usize; 2] {
        [self.y, self.x]
    }

    /// Adjacent coordinate one unit in `direction`
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    pub const fn neighbour(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Manhattan distance to another coordinate
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Rectangular bitmap of walls and passages
///
/// Stored row-major as an `Array2` of shape `(height, width)`, so a maze of
/// `w × h` logical cells has shape `(2h+1, 2w+1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// All-wall grid sized for `width × height` logical cells
    pub(crate) fn new_walled(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((2 * height + 1, 2 * width + 1), Cell::Wall),
        }
    }

    /// Build a grid from exchange-format rows (`1` = wall, `0` = passage)
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the matrix is empty, ragged, or contains a value
    /// other than `0` or `1`.
    pub fn from_matrix(rows: &[Vec<u8>]) -> Result<Self> {
        let mut cells = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let cell = match value {
                    0 => Cell::Passage,
                    1 => Cell::Wall,
                    other => {
                        return Err(MazeError::InvalidGrid {
                            reason: format!("value {other} at ({x}, {y}) is neither 0 nor 1"),
                        });
                    }
                };
                cells.push(cell);
            }
        }
        Self::from_cells(rows.iter().map(Vec::len), cells)
    }

    /// Build a grid from boolean rows (`true` = wall)
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the matrix is empty or ragged.
    pub fn from_bool_matrix(rows: &[Vec<bool>]) -> Result<Self> {
        let cells = rows
            .iter()
            .flatten()
            .map(|&wall| if wall { Cell::Wall } else { Cell::Passage })
            .collect();
        Self::from_cells(rows.iter().map(Vec::len), cells)
    }

    fn from_cells(row_lengths: impl ExactSizeIterator<Item = usize>, cells: Vec<Cell>) -> Result<Self> {
        let height = row_lengths.len();
        let mut width = None;
        for (y, length) in row_lengths.enumerate() {
            match width {
                None => width = Some(length),
                Some(expected) if expected != length => {
                    return Err(MazeError::InvalidGrid {
                        reason: format!("row {y} has {length} cells, expected {expected}"),
                    });
                }
                Some(_) => {}
            }
        }

        let width = width.unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidGrid {
                reason: "grid must have at least one row and one column".to_string(),
            });
        }

        let cells = Array2::from_shape_vec((height, width), cells).map_err(|e| {
            MazeError::InvalidGrid {
                reason: e.to_string(),
            }
        })?;
        Ok(Self { cells })
    }

    /// Number of grid columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of grid rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Array shape `(rows, cols)`, for sizing per-cell side tables
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Logical `(width, height)` if the grid has maze proportions
    ///
    /// Both sides must be odd and at least 3.
    pub fn logical_dimensions(&self) -> Option<(usize, usize)> {
        let (rows, cols) = self.shape();
        (rows >= 3 && cols >= 3 && rows % 2 == 1 && cols % 2 == 1)
            .then(|| ((cols - 1) / 2, (rows - 1) / 2))
    }

    /// Test whether a coordinate lies inside the grid
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width() && coordinate.y < self.height()
    }

    /// Cell at a coordinate, or `None` outside the grid
    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        self.cells.get(coordinate.array_index()).copied()
    }

    /// Test whether a coordinate is an open cell inside the grid
    pub fn is_passage(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate).is_some_and(Cell::is_passage)
    }

    /// Open 4-connected neighbours in north, east, south, west order
    pub fn passage_neighbours(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| coordinate.neighbour(direction))
            .filter(|&neighbour| self.is_passage(neighbour))
    }

    /// Number of open cells
    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_passage()).count()
    }

    /// Conventional entrance at `(1, 1)`
    pub const fn entrance(&self) -> Coordinate {
        Coordinate::new(1, 1)
    }

    /// Conventional exit in the bottom-right room
    pub fn exit(&self) -> Coordinate {
        Coordinate::new(
            self.width().saturating_sub(2),
            self.height().saturating_sub(2),
        )
    }

    /// Iterate over every coordinate with its cell, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| (Coordinate::new(x, y), cell))
    }

    /// Exchange-format rows (`1` = wall, `0` = passage)
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.as_u8()).collect())
            .collect()
    }

    /// Boolean rows (`true` = wall)
    pub fn to_bool_matrix(&self) -> Vec<Vec<bool>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| !cell.is_passage()).collect())
            .collect()
    }

    /// Open a cell, returning whether it was a wall before
    pub(crate) fn carve(&mut self, coordinate: Coordinate) -> bool {
        match self.cells.get_mut(coordinate.array_index()) {
            Some(cell) if *cell == Cell::Wall => {
                *cell = Cell::Passage;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::io::ascii::render(self, None, None))
    }
}
