//! Animated GIF of a maze being carved, ending on its solution

use std::collections::HashSet;
use std::path::Path as FsPath;

use image::{Delay, Frame, Rgba, RgbaImage};

use crate::io::configuration::{
    CARVE_STEPS_PER_FRAME, FINAL_FRAME_HOLD, MAX_CARVE_FRAMES, WALL_COLOR,
};
use crate::io::error::{MazeError, Result};
use crate::io::image::{cell_color, ensure_parent_dir, image_dimensions};
use crate::maze::generator::Carving;
use crate::maze::grid::{Coordinate, Grid};
use crate::maze::solver::Path;

/// Replays the carve order of a maze frame by frame
///
/// Every frame opens at least `steps_per_frame` more cells, and more when the
/// carve order would otherwise need over `MAX_CARVE_FRAMES` frames. When a
/// solution is attached a final frame shows it and is held for longer.
/// Frames are produced one at a time, so only a single image is ever held.
pub struct CarvingAnimation {
    grid: Grid,
    order: Vec<Coordinate>,
    solution: Option<Path>,
    cell_size: u32,
    steps_per_frame: usize,
}

impl CarvingAnimation {
    /// Build an animation from a traced carving
    pub fn new(carving: Carving, cell_size: u32) -> Self {
        Self {
            grid: carving.grid,
            order: carving.order,
            solution: None,
            cell_size,
            steps_per_frame: CARVE_STEPS_PER_FRAME,
        }
    }

    /// Draw the given path on the final frame
    #[must_use]
    pub fn with_solution(mut self, solution: Path) -> Self {
        self.solution = Some(solution);
        self
    }

    /// Override the minimum number of cells opened between frames (at least 1)
    #[must_use]
    pub fn with_steps_per_frame(mut self, steps_per_frame: usize) -> Self {
        self.steps_per_frame = steps_per_frame.max(1);
        self
    }

    /// The finished maze being animated
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells opened per carving frame after scaling to the frame limit
    pub fn effective_steps_per_frame(&self) -> usize {
        self.steps_per_frame
            .max(self.order.len().div_ceil(MAX_CARVE_FRAMES))
    }

    /// Number of frames `render_frames_with` will produce
    pub fn frame_count(&self) -> usize {
        // Blank frame, carving frames, then the optional solution frame
        1 + self.order.len().div_ceil(self.effective_steps_per_frame())
            + usize::from(self.solution.is_some())
    }

    fn fill_cell(&self, img: &mut RgbaImage, coordinate: Coordinate, color: [u8; 4]) {
        let origin = |cell: usize| {
            u32::try_from(cell)
                .ok()
                .and_then(|cell| cell.checked_mul(self.cell_size))
        };
        let (Some(x0), Some(y0)) = (origin(coordinate.x), origin(coordinate.y)) else {
            return;
        };

        for y in y0..y0.saturating_add(self.cell_size) {
            for x in x0..x0.saturating_add(self.cell_size) {
                if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                    *pixel = Rgba(color);
                }
            }
        }
    }

    /// Render every animation frame in order, handing each to `emit`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the cell size is zero or the image too
    /// large, and propagates any error returned by `emit`.
    pub fn render_frames_with<F>(&self, frame_delay_ms: u32, mut emit: F) -> Result<()>
    where
        F: FnMut(Frame) -> Result<()>,
    {
        let (width, height) = image_dimensions(&self.grid, self.cell_size)?;
        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
        let no_path = HashSet::new();

        let mut img = RgbaImage::from_pixel(width, height, Rgba(WALL_COLOR));
        emit(Frame::from_parts(img.clone(), 0, 0, delay))?;

        for batch in self.order.chunks(self.effective_steps_per_frame()) {
            for &coordinate in batch {
                self.fill_cell(&mut img, coordinate, cell_color(&self.grid, &no_path, coordinate));
            }
            emit(Frame::from_parts(img.clone(), 0, 0, delay))?;
        }

        if let Some(solution) = &self.solution {
            let on_path = solution.coordinate_set();
            for &coordinate in solution.coordinates() {
                self.fill_cell(&mut img, coordinate, cell_color(&self.grid, &on_path, coordinate));
            }
            let hold = Delay::from_numer_denom_ms(frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1);
            emit(Frame::from_parts(img, 0, 0, hold))?;
        }

        Ok(())
    }

    /// Export the animation as a GIF, encoding frames as they are rendered
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The frame dimensions are invalid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &FsPath, frame_delay_ms: u32) -> Result<()> {
        image_dimensions(&self.grid, self.cell_size)?;
        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(std::io::BufWriter::new(file));
        self.render_frames_with(frame_delay_ms, |frame| {
            encoder
                .encode_frame(frame)
                .map_err(|e| MazeError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })
        })
    }
}
