//! Maze constants and runtime configuration defaults

// Fits a terminal comfortably
/// Default logical width in rooms
pub const DEFAULT_WIDTH: usize = 15;
/// Default logical height in rooms
pub const DEFAULT_HEIGHT: usize = 15;

// Bounds worst-case work for a single CLI request
/// Maximum logical width or height accepted by the CLI
pub const MAX_MAZE_DIMENSION: usize = 2_000;

/// Default number of mazes per run
pub const DEFAULT_COUNT: usize = 1;

/// Side length in pixels of one grid cell in exported images
pub const CELL_SIZE_PX: u32 = 30;

// One RGBA image at this size takes 256 MiB
/// Largest image, in pixels, that PNG or GIF export will allocate
pub const MAX_IMAGE_PIXELS: u64 = 1 << 26;

// Dark walls on a white floor with pastel markers
/// Wall colour
pub const WALL_COLOR: [u8; 4] = [31, 41, 55, 255];
/// Passage colour
pub const PASSAGE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Solution path colour
pub const PATH_COLOR: [u8; 4] = [254, 240, 138, 255];
/// Entrance marker colour
pub const ENTRANCE_COLOR: [u8; 4] = [187, 247, 208, 255];
/// Exit marker colour
pub const EXIT_COLOR: [u8; 4] = [254, 202, 202, 255];

// Text rendering glyphs
/// Glyph for walls
pub const WALL_GLYPH: char = '#';
/// Glyph for passages
pub const PASSAGE_GLYPH: char = ' ';
/// Glyph for cells on the solution path
pub const PATH_GLYPH: char = '.';
/// Glyph for the entrance
pub const ENTRANCE_GLYPH: char = 'S';
/// Glyph for the exit
pub const EXIT_GLYPH: char = 'E';
/// Glyph for the player
pub const PLAYER_GLYPH: char = '@';

// Animation settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Cells opened between two animation frames
pub const CARVE_STEPS_PER_FRAME: usize = 8;
/// Most carving frames in one animation; larger mazes open more cells per frame
pub const MAX_CARVE_FRAMES: usize = 300;
/// How many frame delays the final solved frame is held for
pub const FINAL_FRAME_HOLD: u32 = 40;

// Output settings
/// Filename prefix for exported mazes
pub const OUTPUT_PREFIX: &str = "maze";
/// Suffix added to exported images with the solution drawn
pub const SOLVED_SUFFIX: &str = "_solved";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
