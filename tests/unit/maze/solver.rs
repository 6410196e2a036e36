//! Tests for uniform-cost path solving and distance maps

#[cfg(test)]
mod tests {
    use mazewright::maze::direction::Direction;
    use mazewright::maze::grid::{Coordinate, Grid};
    use mazewright::maze::solver::{DistanceMap, solve, solve_maze};
    use mazewright::{MazeError, generate};

    fn grid(rows: &[&str]) -> Grid {
        let matrix: Vec<Vec<u8>> = rows
            .iter()
            .map(|row| row.chars().map(|c| u8::from(c == '#')).collect())
            .collect();
        Grid::from_matrix(&matrix).expect("valid matrix")
    }

    fn c(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    // Verifies paths in an open room have Manhattan length
    // Verified by adding diagonal neighbours
    #[test]
    fn test_open_room_path_is_manhattan_length() {
        let room = grid(&["#######", "#     #", "#     #", "#     #", "#######"]);
        let path = solve(&room, c(1, 1), c(5, 3)).expect("reachable");

        assert_eq!(path.steps(), 6);
        assert_eq!(path.start(), Some(c(1, 1)));
        assert_eq!(path.end(), Some(c(5, 3)));
        assert!(path.is_valid_on(&room));
    }

    // Verifies the shorter of two routes around a wall is chosen
    // Verified by popping the largest distance first
    #[test]
    fn test_shortest_route_is_chosen_around_obstacle() {
        // The left detour is 10 steps, the right one is 6
        let maze = grid(&[
            "#######",
            "#   ###",
            "# # ###",
            "# #   #",
            "# ### #",
            "#     #",
            "#######",
        ]);
        let path = solve(&maze, c(3, 1), c(5, 5)).expect("reachable");

        assert_eq!(path.steps(), 6);
        assert!(path.contains(c(3, 3)));
        assert!(!path.contains(c(1, 5)));
    }

    // Verifies start equal to end yields a single-cell path
    // Verified by requiring at least one move
    #[test]
    fn test_start_equal_to_end_is_zero_steps() {
        let room = grid(&["###", "# #", "###"]);
        let path = solve(&room, c(1, 1), c(1, 1)).expect("reachable");

        assert_eq!(path.coordinates(), &[c(1, 1)]);
        assert_eq!(path.steps(), 0);
        assert!(path.directions().is_empty());
    }

    // Verifies unreachable ends report NoPathExists
    // Verified by returning an empty path
    #[test]
    fn test_separated_regions_have_no_path() {
        let split = grid(&["#######", "#  #  #", "#  #  #", "#######"]);
        let result = solve(&split, c(1, 1), c(5, 2));

        match result {
            Err(MazeError::NoPathExists { start, end }) => {
                assert_eq!(start, c(1, 1));
                assert_eq!(end, c(5, 2));
            }
            other => unreachable!("Expected NoPathExists, got {other:?}"),
        }
    }

    // Verifies endpoints on walls are rejected
    // Verified by checking only that endpoints are inside the grid
    #[test]
    fn test_wall_endpoints_are_out_of_bounds() {
        let room = grid(&["####", "#  #", "####"]);

        match solve(&room, c(0, 0), c(2, 1)) {
            Err(MazeError::OutOfBounds { reason, .. }) => assert!(reason.contains("start")),
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }
        match solve(&room, c(1, 1), c(3, 1)) {
            Err(MazeError::OutOfBounds { reason, .. }) => assert!(reason.contains("end")),
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }
    }

    // Verifies endpoints outside the grid are rejected
    // Verified by removing the contains check
    #[test]
    fn test_coordinates_outside_grid_are_out_of_bounds() {
        let room = grid(&["####", "#  #", "####"]);
        let result = solve(&room, c(1, 1), c(40, 1));

        match result {
            Err(MazeError::OutOfBounds {
                coordinate,
                dimensions,
                reason,
            }) => {
                assert_eq!(coordinate, c(40, 1));
                assert_eq!(dimensions, (4, 3));
                assert!(reason.contains("outside"));
            }
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }
    }

    // Verifies solve_maze connects entrance and exit
    // Verified by solving from the exit
    #[test]
    fn test_solve_maze_runs_entrance_to_exit() {
        let maze = generate(6, 6, Some(21)).expect("valid dimensions");
        let path = solve_maze(&maze).expect("perfect mazes are connected");

        assert_eq!(path.start(), Some(maze.entrance()));
        assert_eq!(path.end(), Some(maze.exit()));
        assert!(path.is_valid_on(&maze));
    }

    // Verifies exchange pairs and per-step directions
    // Verified by emitting pairs as (y, x)
    #[test]
    fn test_path_exchange_format_and_directions() {
        let corridor = grid(&["#####", "#   #", "### #", "#####"]);
        let path = solve(&corridor, c(1, 1), c(3, 2)).expect("reachable");

        assert_eq!(path.to_pairs(), vec![(1, 1), (2, 1), (3, 1), (3, 2)]);
        assert_eq!(
            path.directions(),
            vec![Direction::East, Direction::East, Direction::South]
        );
        assert_eq!(path.clone().into_iter().count(), 4);
    }

    // Verifies path validity fails on walls and gaps
    // Verified by ignoring cell state in is_valid_on
    #[test]
    fn test_is_valid_on_rejects_broken_paths() {
        let corridor = grid(&["#####", "#   #", "#####"]);
        let path = solve(&corridor, c(1, 1), c(3, 1)).expect("reachable");
        assert!(path.is_valid_on(&corridor));

        let walled = grid(&["#####", "# # #", "#####"]);
        assert!(!path.is_valid_on(&walled));
    }

    // Verifies flood distances, maximum and furthest cells
    // Verified by starting the flood at distance 1
    #[test]
    fn test_distance_map_counts_steps() {
        let corridor = grid(&["#######", "#     #", "#######"]);
        let distances = DistanceMap::flood(&corridor, c(1, 1)).expect("open start");

        assert_eq!(distances.distance_to(c(1, 1)), Some(0));
        assert_eq!(distances.distance_to(c(4, 1)), Some(3));
        assert_eq!(distances.max_distance(), 4);
        assert_eq!(distances.furthest(), vec![c(5, 1)]);
        assert_eq!(distances.reachable_count(), 5);
    }

    // Verifies unreachable cells have no distance
    // Verified by seeding unreached cells with zero
    #[test]
    fn test_distance_map_leaves_unreachable_cells_empty() {
        let split = grid(&["#######", "#  #  #", "#######"]);
        let distances = DistanceMap::flood(&split, c(1, 1)).expect("open start");

        assert_eq!(distances.distance_to(c(5, 1)), None);
        assert_eq!(distances.distance_to(c(0, 0)), None);
        assert_eq!(distances.distance_to(c(90, 90)), None);
        assert_eq!(distances.reachable_count(), 2);
    }

    // Verifies flooding from a wall is rejected
    // Verified by removing the start check in flood
    #[test]
    fn test_distance_map_requires_open_start() {
        let room = grid(&["###", "# #", "###"]);
        assert!(matches!(
            DistanceMap::flood(&room, c(0, 1)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }
}
