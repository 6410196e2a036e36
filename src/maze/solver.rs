//! Shortest-path search over the passage cells of a grid
//!
//! Works on any wall/passage grid, not only perfect mazes: with cycles present
//! the returned route is still a shortest one.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use ndarray::Array2;

use crate::io::error::{MazeError, Result, out_of_bounds};
use crate::maze::direction::Direction;
use crate::maze::grid::{Coordinate, Grid};

/// Ordered route through adjacent passage cells, endpoints included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coordinates: Vec<Coordinate>,
}

impl Path {
    /// All coordinates from start to end
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of moves along the path (one less than its coordinate count)
    pub fn steps(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// First coordinate
    pub fn start(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    /// Last coordinate
    pub fn end(&self) -> Option<Coordinate> {
        self.coordinates.last().copied()
    }

    /// Test whether the path passes through a coordinate
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }

    /// Coordinates as a set, for repeated membership tests while rendering
    pub fn coordinate_set(&self) -> HashSet<Coordinate> {
        self.coordinates.iter().copied().collect()
    }

    /// Exchange-format `(x, y)` pairs
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.coordinates.iter().map(|c| (c.x, c.y)).collect()
    }

    /// Direction taken at each step
    pub fn directions(&self) -> Vec<Direction> {
        self.coordinates
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Direction::ALL
                    .into_iter()
                    .find(|&direction| from.neighbour(direction) == Some(*to)),
                _ => None,
            })
            .collect()
    }

    /// Check the path is non-empty, stays on passages, and moves one unit per step
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        !self.coordinates.is_empty()
            && self.coordinates.iter().all(|&c| grid.is_passage(c))
            && self
                .coordinates
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a.manhattan_distance(*b) == 1))
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

fn check_endpoint(grid: &Grid, coordinate: Coordinate, role: &'static str) -> Result<()> {
    if !grid.contains(coordinate) {
        return Err(out_of_bounds(grid, coordinate, &format!("{role} is outside the grid")));
    }
    if !grid.is_passage(coordinate) {
        return Err(out_of_bounds(grid, coordinate, &format!("{role} is a wall")));
    }
    Ok(())
}

/// Find a shortest route from `start` to `end` through passage cells
///
/// Uniform-cost search with a binary-heap frontier. Entries whose recorded
/// distance is worse than the best known one are skipped when popped.
/// Equal-distance ties resolve by coordinate order, so results are repeatable.
///
/// # Errors
///
/// Returns `OutOfBounds` if either endpoint is outside the grid or on a wall,
/// and `NoPathExists` if `end` cannot be reached from `start`.
pub fn solve(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<Path> {
    check_endpoint(grid, start, "start")?;
    check_endpoint(grid, end, "end")?;

    let mut distances = Array2::from_elem(grid.shape(), usize::MAX);
    let mut previous: Array2<Option<Coordinate>> = Array2::from_elem(grid.shape(), None);
    let best = |distances: &Array2<usize>, c: Coordinate| {
        distances.get(c.array_index()).copied().unwrap_or(usize::MAX)
    };

    if let Some(d) = distances.get_mut(start.array_index()) {
        *d = 0;
    }
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0_usize, start)));

    let mut reached = false;
    while let Some(Reverse((distance, current))) = frontier.pop() {
        if current == end {
            reached = true;
            break;
        }

        if distance > best(&distances, current) {
            continue;
        }

        let candidate = distance + 1;
        for neighbour in grid.passage_neighbours(current) {
            if candidate < best(&distances, neighbour) {
                if let Some(d) = distances.get_mut(neighbour.array_index()) {
                    *d = candidate;
                }
                if let Some(p) = previous.get_mut(neighbour.array_index()) {
                    *p = Some(current);
                }
                frontier.push(Reverse((candidate, neighbour)));
            }
        }
    }

    if !reached {
        return Err(MazeError::NoPathExists { start, end });
    }

    let mut coordinates = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(current.array_index()).copied().flatten() {
            Some(step) => {
                coordinates.push(step);
                current = step;
            }
            None => return Err(MazeError::NoPathExists { start, end }),
        }
    }
    coordinates.reverse();

    Ok(Path { coordinates })
}

/// Solve from the grid's entrance to its exit
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_maze(grid: &Grid) -> Result<Path> {
    solve(grid, grid.entrance(), grid.exit())
}

/// Breadth-first step counts from one passage cell to every reachable cell
#[derive(Debug, Clone)]
pub struct DistanceMap {
    distances: Array2<Option<usize>>,
    max_distance: usize,
    reachable: usize,
}

impl DistanceMap {
    /// Flood the passage graph from `start`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `start` is outside the grid or on a wall.
    pub fn flood(grid: &Grid, start: Coordinate) -> Result<Self> {
        check_endpoint(grid, start, "start")?;

        let mut distances: Array2<Option<usize>> = Array2::from_elem(grid.shape(), None);
        if let Some(d) = distances.get_mut(start.array_index()) {
            *d = Some(0);
        }

        let mut max_distance = 0;
        let mut reachable = 1;
        let mut queue = VecDeque::from([(start, 0_usize)]);

        // Unit weights: the first visit to a cell is already its shortest distance
        while let Some((current, distance)) = queue.pop_front() {
            max_distance = max_distance.max(distance);
            for neighbour in grid.passage_neighbours(current) {
                if let Some(slot) = distances.get_mut(neighbour.array_index())
                    && slot.is_none()
                {
                    *slot = Some(distance + 1);
                    reachable += 1;
                    queue.push_back((neighbour, distance + 1));
                }
            }
        }

        Ok(Self {
            distances,
            max_distance,
            reachable,
        })
    }

    /// Steps from the start, or `None` if unreachable or outside the grid
    pub fn distance_to(&self, coordinate: Coordinate) -> Option<usize> {
        self.distances.get(coordinate.array_index()).copied().flatten()
    }

    /// Largest distance to any reachable cell
    pub const fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Number of cells reachable from the start, the start included
    pub const fn reachable_count(&self) -> usize {
        self.reachable
    }

    /// All cells at the maximum distance
    pub fn furthest(&self) -> Vec<Coordinate> {
        self.distances
            .indexed_iter()
            .filter(|&(_, &d)| d == Some(self.max_distance))
            .map(|((y, x), _)| Coordinate::new(x, y))
            .collect()
    }
}
