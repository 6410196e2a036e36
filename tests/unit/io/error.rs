//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mazewright::MazeError;
    use mazewright::io::error::invalid_parameter;
    use mazewright::maze::grid::Coordinate;
    use std::error::Error;

    // Verifies file system errors expose their I/O source
    // Verified by returning None from source for FileSystem
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MazeError::FileSystem {
            path: "/tmp/maze_0.png".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create file"));
    }

    // Verifies the dimensions message includes size and reason
    // Verified by printing height before width
    #[test]
    fn test_invalid_dimensions_message() {
        let error = MazeError::InvalidDimensions {
            width: 0,
            height: 4,
            reason: "width and height must be at least 1".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("0x4"));
        assert!(message.contains("at least 1"));
        assert!(error.source().is_none());
    }

    // Verifies the no-path message names both endpoints
    // Verified by printing start twice
    #[test]
    fn test_no_path_message_names_endpoints() {
        let error = MazeError::NoPathExists {
            start: Coordinate::new(1, 1),
            end: Coordinate::new(7, 3),
        };

        let message = error.to_string();
        assert!(message.contains("(1, 1)"));
        assert!(message.contains("(7, 3)"));
    }

    // Verifies the out-of-bounds message names the coordinate, grid size and reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_out_of_bounds_message() {
        let error = MazeError::OutOfBounds {
            coordinate: Coordinate::new(9, 0),
            dimensions: (5, 5),
            reason: "end is outside the grid".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("(9, 0)"));
        assert!(message.contains("5x5"));
        assert!(message.contains("end is outside"));
    }

    // Verifies invalid_parameter keeps name, value and reason
    // Verified by storing the reason as the value
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("cell_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Verifies image errors convert into ImageExport with a source
    // Verified by converting image errors into InvalidGrid
    #[test]
    fn test_image_error_converts_with_source() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MazeError::from(image_error);
        assert!(matches!(error, MazeError::ImageExport { .. }));
        assert!(error.source().is_some());
    }

    // Verifies I/O errors convert into FileSystem and keep their message
    // Verified by dropping the source from the Display output
    #[test]
    fn test_io_error_converts_to_file_system() {
        let error = MazeError::from(std::io::Error::other("disk full"));
        assert!(matches!(error, MazeError::FileSystem { .. }));
        assert!(error.to_string().contains("disk full"));
    }
}
