//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, TestSpec, ValidateArgs};

/// Format experiment header information as a string
pub fn format_experiment_info(spec: &TestSpec) -> String {
    let mut lines = vec![
        format!("  Name: {}", spec.name),
        format!("  Model: {}", spec.model_type),
        format!("  Scale: x{}", spec.scale),
        format!("  GPUs: {}", spec.num_gpu),
    ];
    if let Some(seed) = spec.manual_seed {
        lines.push(format!("  Seed: {seed}"));
    }
    lines.join("\n")
}

/// Format the dataset table as a string
pub fn format_dataset_info(spec: &TestSpec) -> String {
    spec.datasets
        .iter()
        .map(|(label, d)| {
            format!(
                "  {label}: {} ({})\n    gt: {}\n    lq: {}",
                d.name,
                d.dataset_type,
                d.dataroot_gt.display(),
                d.dataroot_lq.display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the network section as a string
pub fn format_network_info(spec: &TestSpec) -> String {
    let net = &spec.network_g;
    let mut lines = vec![format!("  Architecture: {}", net.arch_type)];
    if let Some(window_size) = net.window_size() {
        lines.push(format!("  Window size: {window_size}"));
    }
    if let Some(embed_dim) = net.embed_dim() {
        lines.push(format!("  Embed dim: {embed_dim}"));
    }
    if let Some(depths) = net.depths() {
        lines.push(format!("  Stages: {}", depths.len()));
    }
    if let Some(upsampler) = net.upsampler() {
        lines.push(format!("  Upsampler: {upsampler}"));
    }
    lines.join("\n")
}

/// Format checkpoint paths as a string
pub fn format_path_info(spec: &TestSpec) -> String {
    let mut lines = vec![
        format!("  Checkpoint: {}", spec.path.pretrain_network_g.display()),
        format!("  Strict load: {}", spec.path.strict_load_g),
    ];
    if let Some(resume) = &spec.path.resume_state {
        lines.push(format!("  Resume state: {}", resume.display()));
    }
    lines.join("\n")
}

/// Format the metric list as a string
pub fn format_metric_info(spec: &TestSpec) -> String {
    spec.val
        .metrics
        .iter()
        .map(|(label, m)| {
            let mut line = format!("  {label}: {}", m.metric_type);
            if m.crop_border > 0 {
                line.push_str(&format!(" (crop_border={})", m.crop_border));
            }
            if m.test_y_channel {
                line.push_str(" (y channel)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &TestSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_experiment_info(spec));
    println!();
    println!("Datasets:");
    println!("{}", format_dataset_info(spec));
    println!();
    println!("Network:");
    println!("{}", format_network_info(spec));
    println!();
    println!("Paths:");
    println!("{}", format_path_info(spec));
    println!();
    println!("Metrics:");
    println!("{}", format_metric_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Resolved {} dataset(s):\n{}",
            spec.datasets.len(),
            format_dataset_info(&spec)
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Resolved {} metric(s):\n{}",
            spec.val.metrics.len(),
            format_metric_info(&spec)
        ),
    );

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
