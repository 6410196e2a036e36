use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over the logical cells of a maze
///
/// Cells are addressed by logical `(cx, cy)` and stored row-major.
/// Coordinates outside the maze are never members.
#[derive(Clone, Debug)]
pub struct VisitedCells {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl VisitedCells {
    /// Create a set with no cells visited
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    const fn index(&self, cx: usize, cy: usize) -> Option<usize> {
        if cx < self.width && cy < self.height {
            Some(cy * self.width + cx)
        } else {
            None
        }
    }

    /// Mark a cell visited
    ///
    /// Returns `true` if the cell was not visited before.
    pub fn insert(&mut self, cx: usize, cy: usize) -> bool {
        match self.index(cx, cy) {
            Some(index) => !self.bits.replace(index, true),
            None => false,
        }
    }

    /// Test cell membership
    pub fn contains(&self, cx: usize, cy: usize) -> bool {
        self.index(cx, cy)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every cell has been visited
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Total number of logical cells tracked
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }
}

impl fmt::Display for VisitedCells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedCells({}/{} of {}x{})",
            self.count(),
            self.capacity(),
            self.width,
            self.height
        )
    }
}
