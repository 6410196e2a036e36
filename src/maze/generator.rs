//! Randomized depth-first maze carving
//!
//! Walks the logical cell grid with an explicit stack, always extending the walk
//! into a uniformly chosen unvisited neighbour and backtracking when none is left.
//! Each carve joins a visited cell to an unvisited one, so the carved passages
//! form a spanning tree: every room is reachable and there are no loops.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{MazeError, Result};
use crate::maze::direction::Direction;
use crate::maze::grid::{Coordinate, Grid};
use crate::maze::visited::VisitedCells;

/// Order in which a room's neighbours are enumerated before the random pick
///
/// Fixed so that a seed always maps to the same maze.
const NEIGHBOUR_ORDER: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::North,
    Direction::West,
];

/// A logical room coordinate `(cx, cy)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Room {
    cx: usize,
    cy: usize,
}

impl Room {
    const fn centre(self) -> Coordinate {
        Coordinate::from_logical(self.cx, self.cy)
    }

    // Grid cell on the shared border of two adjacent rooms
    const fn border_with(self, other: Self) -> Coordinate {
        Coordinate::new(self.cx + other.cx + 1, self.cy + other.cy + 1)
    }
}

/// A finished maze together with the order its cells were opened
#[derive(Debug, Clone)]
pub struct Carving {
    /// The carved maze
    pub grid: Grid,
    /// Grid coordinates in the order they changed from wall to passage
    pub order: Vec<Coordinate>,
}

/// Perfect maze generator for a fixed logical size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    width: usize,
    height: usize,
}

impl MazeGenerator {
    /// Create a generator for `width × height` logical cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either side is zero or the resulting
    /// grid would not fit in memory addressing.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "width and height must be at least 1".to_string(),
            });
        }

        let grid_side = |n: usize| n.checked_mul(2).and_then(|doubled| doubled.checked_add(1));
        let fits = match (grid_side(width), grid_side(height)) {
            (Some(cols), Some(rows)) => cols.checked_mul(rows).is_some(),
            _ => false,
        };
        if !fits {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "grid size overflows usize".to_string(),
            });
        }

        Ok(Self { width, height })
    }

    /// Logical width in rooms
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Logical height in rooms
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Carve a maze using the supplied randomness source
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        self.carve(rng, |_| {})
    }

    /// Carve a maze and record the order cells were opened in
    pub fn generate_traced<R: Rng + ?Sized>(&self, rng: &mut R) -> Carving {
        let mut order = Vec::with_capacity(2 * self.width * self.height);
        let grid = self.carve(rng, |coordinate| order.push(coordinate));
        Carving { grid, order }
    }

    fn carve<R, F>(&self, rng: &mut R, mut on_open: F) -> Grid
    where
        R: Rng + ?Sized,
        F: FnMut(Coordinate),
    {
        let mut grid = Grid::new_walled(self.width, self.height);
        let mut open = |grid: &mut Grid, coordinate: Coordinate| {
            if grid.carve(coordinate) {
                on_open(coordinate);
            }
        };

        let mut visited = VisitedCells::new(self.width, self.height);
        let mut stack = vec![Room { cx: 0, cy: 0 }];
        let mut candidates = Vec::with_capacity(NEIGHBOUR_ORDER.len());

        while let Some(&current) = stack.last() {
            visited.insert(current.cx, current.cy);

            candidates.clear();
            candidates.extend(
                NEIGHBOUR_ORDER
                    .iter()
                    .filter_map(|&direction| self.neighbour(current, direction))
                    .filter(|room| !visited.contains(room.cx, room.cy)),
            );

            if let Some(&next) = candidates.choose(rng) {
                open(&mut grid, current.centre());
                open(&mut grid, current.border_with(next));
                open(&mut grid, next.centre());
                stack.push(next);
            } else {
                stack.pop();
            }
        }

        debug_assert!(visited.is_complete(), "depth-first walk left rooms unvisited");

        // A 1x1 maze never carves inside the loop
        open(&mut grid, Coordinate::from_logical(0, 0));
        open(
            &mut grid,
            Coordinate::from_logical(self.width - 1, self.height - 1),
        );

        grid
    }

    fn neighbour(&self, room: Room, direction: Direction) -> Option<Room> {
        let (dx, dy) = direction.offset();
        let cx = room.cx.checked_add_signed(dx)?;
        let cy = room.cy.checked_add_signed(dy)?;
        (cx < self.width && cy < self.height).then_some(Room { cx, cy })
    }
}

/// Generate a perfect maze of `width × height` logical cells
///
/// A seed makes the result reproducible; without one the thread-local
/// generator is used.
///
/// # Errors
///
/// Returns `InvalidDimensions` if either side is zero or too large.
pub fn generate(width: usize, height: usize, seed: Option<u64>) -> Result<Grid> {
    let generator = MazeGenerator::new(width, height)?;
    let grid = match seed {
        Some(seed) => generator.generate_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => generator.generate_with_rng(&mut rand::rng()),
    };
    Ok(grid)
}
