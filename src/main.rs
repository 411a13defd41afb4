//! stereosr CLI
//!
//! Test-harness entry point for stereo image super-resolution.
//!
//! # Usage
//!
//! ```bash
//! # Validate a test configuration
//! stereosr validate configs/test_stereosr_hat_x4.yml
//!
//! # Detailed summary
//! stereosr validate configs/test_stereosr_hat_x4.yml --detailed
//!
//! # Inspect as JSON or YAML
//! stereosr info configs/test_stereosr_hat_x4.yml --format json
//!
//! # Generate a starter configuration
//! stereosr init --benchmark kitti2012 --scale 4 --output test_x4.yml
//!
//! # List the registered implementations
//! stereosr registry
//! ```

use clap::Parser;
use std::process::ExitCode;
use stereosr::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
