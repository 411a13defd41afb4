//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_config(&args.config).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Experiment: {}", spec.name);
            println!("Model: {} / {}", spec.model_type, spec.network_g.arch_type);
            println!("Scale: x{}", spec.scale);
            println!("Datasets: {}", spec.datasets.len());
            for (label, dataset) in &spec.datasets {
                println!("  {label}: {}", dataset.name);
            }
            println!("Metrics: {}", spec.val.metrics.len());
            for (label, metric) in &spec.val.metrics {
                println!("  {label}: {}", metric.metric_type);
            }
            println!("Checkpoint: {}", spec.path.pretrain_network_g.display());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
