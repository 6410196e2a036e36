//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use mazewright::MazeError;
    use mazewright::io::configuration::{
        CELL_SIZE_PX, ENTRANCE_COLOR, EXIT_COLOR, MAX_MAZE_DIMENSION, PASSAGE_COLOR, PATH_COLOR,
        WALL_COLOR,
    };
    use mazewright::io::image::{export_maze_as_png, image_dimensions, render_image};
    use mazewright::maze::grid::Grid;
    use mazewright::maze::solver::solve_maze;

    fn corridor() -> Grid {
        Grid::from_matrix(&[
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 0, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1],
        ])
        .expect("valid matrix")
    }

    // Verifies pixel dimensions scale with cell size and zero is rejected
    // Verified by dropping the zero cell size check
    #[test]
    fn test_image_dimensions_scale_by_cell_size() {
        let grid = corridor();
        assert_eq!(image_dimensions(&grid, 4).ok(), Some((20, 20)));
        assert!(matches!(
            image_dimensions(&grid, 0),
            Err(MazeError::InvalidParameter { .. })
        ));
    }

    // Verifies images above the pixel cap are refused before anything is allocated
    // Verified by removing the MAX_IMAGE_PIXELS comparison
    #[test]
    fn test_image_dimensions_reject_oversized_images() {
        let grid = corridor();
        assert!(image_dimensions(&grid, 1_600).is_ok());

        let error = image_dimensions(&grid, 3_000).expect_err("225M pixels exceeds the cap");
        assert!(matches!(error, MazeError::InvalidParameter { .. }));
        assert!(error.to_string().contains("15000x15000"));
    }

    // Verifies the largest maze the CLI accepts is refused at the default cell size
    // Verified by raising MAX_IMAGE_PIXELS to u64::MAX
    #[test]
    fn test_export_refuses_oversized_maze_without_writing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("huge.png");
        let side = 2 * MAX_MAZE_DIMENSION + 1;
        let grid = Grid::from_matrix(&vec![vec![1_u8; side]; side]).expect("valid matrix");

        let result = export_maze_as_png(&grid, None, CELL_SIZE_PX, &output);

        assert!(matches!(result, Err(MazeError::InvalidParameter { .. })));
        assert!(!output.exists());
    }

    // Verifies each cell kind gets its colour and the path overlays plain passages
    // Verified by drawing path cells with the passage colour
    #[test]
    fn test_render_image_colours_cells() {
        let grid = corridor();
        let path = solve_maze(&grid).expect("reachable");
        let img = render_image(&grid, Some(&path), 2).expect("valid size");

        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(*img.get_pixel(0, 0), Rgba(WALL_COLOR));
        assert_eq!(*img.get_pixel(2, 2), Rgba(ENTRANCE_COLOR));
        assert_eq!(*img.get_pixel(4, 2), Rgba(PATH_COLOR));
        assert_eq!(*img.get_pixel(6, 6), Rgba(EXIT_COLOR));
        assert_eq!(*img.get_pixel(2, 6), Rgba(PASSAGE_COLOR));
    }

    // Verifies export creates missing parent directories and writes a readable PNG
    // Verified by skipping ensure_parent_dir
    #[test]
    fn test_export_creates_nested_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("nested").join("maze.png");
        let grid = mazewright::generate(4, 4, Some(1)).expect("valid dimensions");

        export_maze_as_png(&grid, None, 3, &output).expect("export succeeds");

        let saved = image::open(&output).expect("readable png");
        assert_eq!(saved.width(), 27);
        assert_eq!(saved.height(), 27);
    }

    // Verifies an invalid cell size fails before any file is created
    // Verified by creating the file ahead of rendering
    #[test]
    fn test_export_rejects_zero_cell_size() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("maze.png");
        let grid = corridor();

        let result = export_maze_as_png(&grid, None, 0, &output);

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
