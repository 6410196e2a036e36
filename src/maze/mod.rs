//! Maze data structures and algorithms
//!
//! This module contains the core of the crate:
//! - The wall/passage grid and its coordinate system
//! - Randomized depth-first maze carving
//! - Uniform-cost shortest-path solving
//! - Player move validation on a finished maze

/// Cardinal directions and key mapping
pub mod direction;
/// Randomized depth-first maze carving
pub mod generator;
/// Wall/passage grid and coordinates
pub mod grid;
/// Player position tracking and move validation
pub mod session;
/// Shortest-path search and distance maps
pub mod solver;
/// Bitset of visited logical cells
pub mod visited;

pub use direction::Direction;
pub use grid::{Cell, Coordinate, Grid};
pub use solver::Path;
