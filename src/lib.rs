//! Perfect maze generation and shortest-path solving on a wall/passage grid
//!
//! A maze is carved as a randomized spanning tree over a `width × height` grid of
//! logical cells and stored as a `(2·width+1) × (2·height+1)` bitmap of walls and
//! passages. The solver runs a uniform-cost search over any such bitmap and returns
//! the shortest route between two passage cells.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Grid model, maze generation, path solving and player sessions
pub mod maze;

pub use io::error::{MazeError, Result};
pub use maze::generator::{MazeGenerator, generate};
pub use maze::grid::{Cell, Coordinate, Grid};
pub use maze::solver::{Path, solve};
