//! Console output levels for the test harness CLI

/// Verbosity selected by the global `--verbose`/`--quiet` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress everything except errors
    Quiet,
    /// Default progress output
    Normal,
    /// Per-dataset and per-metric detail
    Verbose,
}

impl LogLevel {
    /// Resolve the global CLI flags; `--quiet` wins when both are given
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Print `msg` if the selected level permits output at `required`
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}
