//! Text rendering for terminals and logs

use std::collections::HashSet;

use crate::io::configuration::{
    ENTRANCE_GLYPH, EXIT_GLYPH, PASSAGE_GLYPH, PATH_GLYPH, PLAYER_GLYPH, WALL_GLYPH,
};
use crate::maze::grid::{Coordinate, Grid};
use crate::maze::solver::Path;

/// Render a grid one character per cell, one line per row
///
/// Marker precedence is player, then entrance/exit, then path. Entrance and
/// exit markers only appear on open cells.
pub fn render(grid: &Grid, path: Option<&Path>, player: Option<Coordinate>) -> String {
    let on_path: HashSet<Coordinate> = path.map(Path::coordinate_set).unwrap_or_default();
    let entrance = grid.entrance();
    let exit = grid.exit();

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (coordinate, cell) in grid.iter() {
        let glyph = if Some(coordinate) == player {
            PLAYER_GLYPH
        } else if !cell.is_passage() {
            WALL_GLYPH
        } else if coordinate == entrance {
            ENTRANCE_GLYPH
        } else if coordinate == exit {
            EXIT_GLYPH
        } else if on_path.contains(&coordinate) {
            PATH_GLYPH
        } else {
            PASSAGE_GLYPH
        };
        out.push(glyph);

        if coordinate.x + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}
