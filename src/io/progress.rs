//! Progress display for batch maze generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking how many mazes of a batch are done
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar for `maze_count` mazes
    pub fn initialize(&mut self, maze_count: usize) {
        let bar = ProgressBar::new(maze_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Label the maze currently being generated
    pub fn start_maze(&self, index: usize, width: usize, height: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("maze {index} ({width}x{height})"));
        }
    }

    /// Count a finished maze
    pub fn complete_maze(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Run `f` with the bar hidden so it can write to the terminal
    pub fn suspend<F: FnOnce()>(&self, f: F) {
        match self.bar {
            Some(ref bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Write a status line to stderr without tearing the bar
    // Allow print for user feedback on finished mazes
    #[allow(clippy::print_stderr)]
    pub fn report(&self, line: &str) {
        self.suspend(|| eprintln!("{line}"));
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
