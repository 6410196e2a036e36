//! PNG export of mazes with optional solution overlay

use std::collections::HashSet;
use std::path::Path as FsPath;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{
    ENTRANCE_COLOR, EXIT_COLOR, MAX_IMAGE_PIXELS, PASSAGE_COLOR, PATH_COLOR, WALL_COLOR,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::maze::grid::{Coordinate, Grid};
use crate::maze::solver::Path;

/// Colour of a single grid cell
pub(crate) fn cell_color(grid: &Grid, on_path: &HashSet<Coordinate>, coordinate: Coordinate) -> [u8; 4] {
    if !grid.is_passage(coordinate) {
        WALL_COLOR
    } else if coordinate == grid.entrance() {
        ENTRANCE_COLOR
    } else if coordinate == grid.exit() {
        EXIT_COLOR
    } else if on_path.contains(&coordinate) {
        PATH_COLOR
    } else {
        PASSAGE_COLOR
    }
}

/// Pixel dimensions of a grid drawn at `cell_size`
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero, the image would exceed
/// `u32` pixels per side, or it would hold more than `MAX_IMAGE_PIXELS` pixels.
pub fn image_dimensions(grid: &Grid, cell_size: u32) -> Result<(u32, u32)> {
    if cell_size == 0 {
        return Err(invalid_parameter("cell_size", &cell_size, &"must be positive"));
    }

    let scale = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
    };
    let (Some(width), Some(height)) = (scale(grid.width()), scale(grid.height())) else {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"image would exceed u32 pixels per side",
        ));
    };

    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_IMAGE_PIXELS {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("{width}x{height} image exceeds {MAX_IMAGE_PIXELS} pixels"),
        ));
    }

    Ok((width, height))
}

/// Draw a grid as an RGBA image, `cell_size` pixels per cell
///
/// # Errors
///
/// Returns `InvalidParameter` if the image dimensions are invalid.
pub fn render_image(grid: &Grid, path: Option<&Path>, cell_size: u32) -> Result<RgbaImage> {
    let (width, height) = image_dimensions(grid, cell_size)?;
    let on_path = path.map(Path::coordinate_set).unwrap_or_default();

    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        let coordinate = Coordinate::new((px / cell_size) as usize, (py / cell_size) as usize);
        Rgba(cell_color(grid, &on_path, coordinate))
    }))
}

/// Create the parent directory of an output file if needed
pub(crate) fn ensure_parent_dir(output_path: &FsPath) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export a maze as a PNG, drawing the solution path if given
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(
    grid: &Grid,
    path: Option<&Path>,
    cell_size: u32,
    output_path: &FsPath,
) -> Result<()> {
    let img = render_image(grid, path, cell_size)?;

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
