//! Command-line interface for generating, exporting, solving and playing mazes

use crate::io::ascii::render;
use crate::io::configuration::{
    CELL_SIZE_PX, DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    MAX_MAZE_DIMENSION, OUTPUT_PREFIX, SOLVED_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::CarvingAnimation;
use crate::maze::direction::Direction;
use crate::maze::generator::{Carving, MazeGenerator};
use crate::maze::session::{MazeSession, MoveOutcome};
use crate::maze::solver::{DistanceMap, solve_maze};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

fn parse_dimension(value: &str) -> std::result::Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a whole number: {e}"))?;
    if (1..=MAX_MAZE_DIMENSION).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_MAZE_DIMENSION}"))
    }
}

fn parse_positive(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("'{value}' is not a whole number: {e}")),
    }
}

#[derive(Parser)]
#[command(name = "mazewright")]
#[command(author, version, about = "Generate and solve perfect mazes")]
/// Command-line arguments for the maze tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory to write PNG (and GIF) output into
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Maze width in rooms
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, value_parser = parse_dimension)]
    pub width: usize,

    /// Maze height in rooms
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_dimension)]
    pub height: usize,

    /// Random seed for reproducible mazes (maze i uses seed + i)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, value_parser = parse_positive)]
    pub count: usize,

    /// Also export and print the solution path
    #[arg(long)]
    pub solve: bool,

    /// Print each maze as text
    #[arg(short, long)]
    pub ascii: bool,

    /// Export an animated GIF of the carving
    #[arg(short, long)]
    pub visualize: bool,

    /// Play the first maze interactively, reading moves from stdin
    #[arg(short, long)]
    pub play: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate mazes even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Pixels per grid cell in exported images
    #[arg(short = 'c', long, default_value_t = CELL_SIZE_PX, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_size: u32,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed for the maze at `index`, if the run is seeded
    pub const fn seed_for(&self, index: usize) -> Option<u64> {
        match self.seed {
            Some(seed) => Some(seed.wrapping_add(index as u64)),
            None => None,
        }
    }
}

/// File locations for one maze's exports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeOutputs {
    /// Plain maze image
    pub maze: PathBuf,
    /// Maze image with the solution drawn
    pub solved: PathBuf,
    /// Carving animation
    pub animation: PathBuf,
}

impl MazeOutputs {
    /// Output names for maze `index` inside `directory`
    pub fn new(directory: &Path, index: usize) -> Self {
        let stem = format!("{OUTPUT_PREFIX}_{index}");
        Self {
            maze: directory.join(format!("{stem}.png")),
            solved: directory.join(format!("{stem}{SOLVED_SUFFIX}.png")),
            animation: directory.join(format!("{stem}.gif")),
        }
    }
}

/// Facts about one generated maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeReport {
    /// Position in the batch
    pub index: usize,
    /// Seed used, if any
    pub seed: Option<u64>,
    /// Logical width
    pub width: usize,
    /// Logical height
    pub height: usize,
    /// Moves on the entrance-to-exit shortest path
    pub solution_steps: usize,
    /// Largest distance from the entrance to any cell
    pub furthest_distance: usize,
    /// Whether every requested export already existed, so nothing was written
    pub skipped: bool,
}

impl fmt::Display for MazeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seed = self
            .seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string());
        write!(
            f,
            "maze {}: {}x{} seed {seed}, solution {} steps, furthest cell {} steps from entrance",
            self.index, self.width, self.height, self.solution_steps, self.furthest_distance
        )?;
        if self.skipped {
            f.write_str(" (output exists, not exported)")?;
        }
        Ok(())
    }
}

/// Orchestrates batch generation with progress tracking
pub struct MazeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if generation, solving, export or terminal I/O fails
    pub fn process(&mut self) -> Result<Vec<MazeReport>> {
        if self.cli.play {
            let carving = self.carve(0)?;
            let mut session = MazeSession::new(carving.grid);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_session(&mut session, stdin.lock(), &mut stdout.lock())?;
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut reports = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            reports.push(self.process_maze(index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn carve(&self, index: usize) -> Result<Carving> {
        let generator = MazeGenerator::new(self.cli.width, self.cli.height)?;
        let mut rng = match self.cli.seed_for(index) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        if self.cli.visualize {
            Ok(generator.generate_traced(&mut rng))
        } else {
            Ok(Carving {
                grid: generator.generate_with_rng(&mut rng),
                order: Vec::new(),
            })
        }
    }

    // Allow print for the requested text output
    #[allow(clippy::print_stdout)]
    fn print_text(&self, text: &str) {
        match self.progress_manager {
            Some(ref pm) => pm.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }

    fn should_write(&self, output: &Path) -> bool {
        !self.cli.skip_existing() || !output.exists()
    }

    fn process_maze(&self, index: usize) -> Result<MazeReport> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_maze(index, self.cli.width, self.cli.height);
        }

        let carving = self.carve(index)?;
        let solution = solve_maze(&carving.grid)?;
        let distances = DistanceMap::flood(&carving.grid, carving.grid.entrance())?;

        if self.cli.ascii {
            let shown = self.cli.solve.then_some(&solution);
            self.print_text(&render(&carving.grid, shown, None));
        }

        let mut report = MazeReport {
            index,
            seed: self.cli.seed_for(index),
            width: self.cli.width,
            height: self.cli.height,
            solution_steps: solution.steps(),
            furthest_distance: distances.max_distance(),
            skipped: false,
        };

        if let Some(directory) = self.cli.output.as_deref() {
            let outputs = MazeOutputs::new(directory, index);

            // Each requested file is skipped on its own when it already exists
            let write_maze = self.should_write(&outputs.maze);
            let write_solved = self.cli.solve && self.should_write(&outputs.solved);
            let write_animation = self.cli.visualize && self.should_write(&outputs.animation);
            report.skipped = !(write_maze || write_solved || write_animation);

            if write_maze {
                export_maze_as_png(&carving.grid, None, self.cli.cell_size, &outputs.maze)?;
            }
            if write_solved {
                export_maze_as_png(
                    &carving.grid,
                    Some(&solution),
                    self.cli.cell_size,
                    &outputs.solved,
                )?;
            }
            if write_animation {
                let mut animation = CarvingAnimation::new(carving, self.cli.cell_size);
                if self.cli.solve {
                    animation = animation.with_solution(solution);
                }
                animation.export_gif(&outputs.animation, GIF_FRAME_DELAY_MS)?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.report(&report.to_string());
            pm.complete_maze();
        }

        Ok(report)
    }
}

// One line of input may hold a single key name or a run of WASD letters
fn parse_moves(line: &str) -> Option<Vec<Direction>> {
    let mut moves = Vec::new();
    for token in line.split_whitespace() {
        if let Some(direction) = Direction::from_key(token) {
            moves.push(direction);
        } else {
            let run: Option<Vec<Direction>> = token
                .chars()
                .map(|c| Direction::from_key(c.encode_utf8(&mut [0; 4])))
                .collect();
            moves.extend(run?);
        }
    }
    Some(moves)
}

/// Play a session from line-based input until the exit is reached or input ends
///
/// Each line holds moves (`w`/`a`/`s`/`d`, runs like `ddss`, or arrow names).
/// `r` resets the player, `h` toggles the solution overlay, `q` quits.
/// The board and move count are redrawn after every line.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the maze
/// has no solution when one is requested.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut MazeSession,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut show_solution = false;
    draw_board(session, show_solution, output)?;
    writeln!(output, "Use WASD or arrow names to move")?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "r" | "reset" => session.reset(),
            "h" | "hint" => show_solution = !show_solution,
            text => match parse_moves(text) {
                Some(moves) => {
                    for direction in moves {
                        if session.try_move(direction) == MoveOutcome::Blocked {
                            writeln!(output, "Blocked moving {direction}")?;
                        }
                    }
                }
                None => writeln!(output, "Unknown input '{text}'")?,
            },
        }

        draw_board(session, show_solution, output)?;

        if session.is_won() {
            write!(
                output,
                "Congratulations! You solved the maze in {} moves!",
                session.moves()
            )?;
            if session.is_optimal()? {
                write!(output, " That's the optimal solution!")?;
            }
            writeln!(output)?;
            break;
        }
    }

    Ok(())
}

fn draw_board<W: Write>(session: &mut MazeSession, show_solution: bool, output: &mut W) -> Result<()> {
    let player = session.player();
    let moves = session.moves();
    let board = if show_solution {
        let solution = session.solution()?.clone();
        render(session.grid(), Some(&solution), Some(player))
    } else {
        render(session.grid(), None, Some(player))
    };
    write!(output, "{board}")?;
    writeln!(output, "Moves: {moves}")?;
    Ok(())
}
