//! Progress reporting for batch generation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a batch of generation runs
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a bar sized to the number of runs
    pub fn new(runs: usize) -> Self {
        let bar = ProgressBar::new(runs as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] Runs: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        Self { bar }
    }

    /// Show the seed of the run currently in flight
    pub fn start_run(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Mark one run as finished
    pub fn complete_run(&self) {
        self.bar.inc(1);
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All runs complete");
    }
}
