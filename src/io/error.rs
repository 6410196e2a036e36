//! Error types for maze generation, solving and export

use std::fmt;
use std::path::PathBuf;

use crate::maze::grid::{Coordinate, Grid};

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Requested maze size cannot be generated
    InvalidDimensions {
        /// Requested logical width
        width: usize,
        /// Requested logical height
        height: usize,
        /// Why the size was rejected
        reason: String,
    },

    /// A search endpoint is outside the grid or on a wall
    OutOfBounds {
        /// The offending coordinate
        coordinate: Coordinate,
        /// Grid dimensions (width, height) in grid cells
        dimensions: (usize, usize),
        /// Which endpoint and what is wrong with it
        reason: String,
    },

    /// The end cell is not reachable from the start cell
    NoPathExists {
        /// Search start
        start: Coordinate,
        /// Search target
        end: Coordinate,
    },

    /// A hand-built grid matrix is malformed
    InvalidGrid {
        /// Description of the malformation
        reason: String,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid maze dimensions {width}x{height}: {reason}")
            }
            Self::OutOfBounds {
                coordinate,
                dimensions,
                reason,
            } => {
                write!(
                    f,
                    "Coordinate {coordinate} is not usable on a {}x{} grid: {reason}",
                    dimensions.0, dimensions.1
                )
            }
            Self::NoPathExists { start, end } => {
                write!(f, "No path exists from {start} to {end}")
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a coordinate on a grid
pub fn out_of_bounds(grid: &Grid, coordinate: Coordinate, reason: &impl ToString) -> MazeError {
    MazeError::OutOfBounds {
        coordinate,
        dimensions: (grid.width(), grid.height()),
        reason: reason.to_string(),
    }
}
