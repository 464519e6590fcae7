use std::num::NonZeroUsize;
use std::thread;

/// Tuning knobs for multiplication and printing.
///
/// Fields are private and every write path clamps to the documented range,
/// so a `Config` handed to the kernel is always valid. The kernel reads the
/// config by value at the start of each call; mutating a config afterwards
/// only affects later calls.
#[derive(Debug, Clone)]
pub struct Config {
    max_parallelism: usize,
    parallelize_order: usize,
    print_decimal_places: usize,
}

impl Config {
    /// Create a config with the default values.
    pub fn new() -> Self {
        Config {
            max_parallelism: default_parallelism(),
            parallelize_order: 64,
            print_decimal_places: 2,
        }
    }

    /// Maximum number of worker threads used when a multiplication is large
    /// enough to run in parallel. Defaults to the number of available
    /// processor cores.
    pub fn max_parallelism(&self) -> usize {
        self.max_parallelism
    }

    /// Set the worker thread limit, clamped to [1, 1024].
    pub fn with_max_parallelism(mut self, value: usize) -> Self {
        self.max_parallelism = value.clamp(1, 1024);
        self
    }

    /// Minimal combined problem size (left rows + right columns + inner
    /// dimension) at which multiplication switches to parallel execution.
    /// Defaults to 64.
    pub fn parallelize_order(&self) -> usize {
        self.parallelize_order
    }

    /// Set the parallelization threshold, clamped to at least 3.
    pub fn with_parallelize_order(mut self, value: usize) -> Self {
        self.parallelize_order = value.max(3);
        self
    }

    /// Maximal number of decimal places matrix elements are rounded to when
    /// printing. Defaults to 2. Not used by the numeric kernel.
    pub fn print_decimal_places(&self) -> usize {
        self.print_decimal_places
    }

    /// Set the print precision, clamped to [2, 12].
    pub fn with_print_decimal_places(mut self, value: usize) -> Self {
        self.print_decimal_places = value.clamp(2, 12);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .clamp(1, 1024)
}
