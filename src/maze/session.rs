//! Player position tracking on a finished maze
//!
//! The session only decides whether a requested step lands on a passage and
//! counts accepted steps; input translation and drawing belong to the caller.

use crate::io::error::Result;
use crate::maze::direction::Direction;
use crate::maze::grid::{Coordinate, Grid};
use crate::maze::solver::{Path, solve_maze};

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto the given passage cell
    Moved(Coordinate),
    /// The target is a wall or outside the grid; nothing changed
    Blocked,
    /// The player already stands on the exit; nothing changed
    Finished,
}

/// A player walking a maze from its entrance towards its exit
#[derive(Debug, Clone)]
pub struct MazeSession {
    grid: Grid,
    player: Coordinate,
    moves: usize,
    solution: Option<Path>,
}

impl MazeSession {
    /// Start a session with the player on the entrance
    pub fn new(grid: Grid) -> Self {
        let player = grid.entrance();
        Self {
            grid,
            player,
            moves: 0,
            solution: None,
        }
    }

    /// The maze being played
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current player position
    pub const fn player(&self) -> Coordinate {
        self.player
    }

    /// Number of accepted moves
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Test whether the player has reached the exit
    pub fn is_won(&self) -> bool {
        self.player == self.grid.exit()
    }

    /// Attempt a single step
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_won() {
            return MoveOutcome::Finished;
        }

        match self.player.neighbour(direction) {
            Some(target) if self.grid.is_passage(target) => {
                self.player = target;
                self.moves += 1;
                MoveOutcome::Moved(target)
            }
            _ => MoveOutcome::Blocked,
        }
    }

    /// Shortest entrance-to-exit route, computed on first request
    ///
    /// # Errors
    ///
    /// Propagates solver errors for grids whose exit cannot be reached.
    pub fn solution(&mut self) -> Result<&Path> {
        let path = match self.solution.take() {
            Some(path) => path,
            None => solve_maze(&self.grid)?,
        };
        Ok(&*self.solution.insert(path))
    }

    /// Test whether the exit was reached in no more moves than the shortest route
    ///
    /// # Errors
    ///
    /// Propagates solver errors for grids whose exit cannot be reached.
    pub fn is_optimal(&mut self) -> Result<bool> {
        if !self.is_won() {
            return Ok(false);
        }
        let moves = self.moves;
        Ok(moves <= self.solution()?.steps())
    }

    /// Put the player back on the entrance and clear the move count
    pub fn reset(&mut self) {
        self.player = self.grid.entrance();
        self.moves = 0;
    }
}
