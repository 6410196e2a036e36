//! Input/output layer built on top of the maze core
//!
//! Rendering, file export, progress display, command-line handling and the
//! crate-wide error type live here. Nothing in `maze` depends on this module
//! except for the error type.

/// Text rendering of grids, paths and players
pub mod ascii;
/// Command-line interface and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Animated GIF of the carving process
pub mod visualization;
