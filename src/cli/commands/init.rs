//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::templates::{generate_yaml, Benchmark};
use crate::config::InitArgs;
use std::fs;

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let benchmarks: &[Benchmark] = if args.benchmark.is_empty() {
        &Benchmark::ALL
    } else {
        &args.benchmark
    };

    let names: Vec<&str> = benchmarks.iter().map(|b| b.name()).collect();
    log(
        level,
        LogLevel::Verbose,
        &format!("Generating x{} config for: {}", args.scale, names.join(", ")),
    );

    let yaml = generate_yaml(benchmarks, args.scale);

    match &args.output {
        Some(path) => {
            fs::write(path, &yaml)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote test configuration to {}", path.display()),
            );
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
