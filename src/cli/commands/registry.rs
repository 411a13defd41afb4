//! Registry command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::RegistryArgs;
use crate::registry::{Descriptor, Registries, Registry};

fn format_registry(registry: &Registry<Descriptor>) -> String {
    let mut lines = vec![format!("{}s:", registry.kind())];
    for (name, descriptor) in registry.iter() {
        lines.push(format!("  {name} - {}", descriptor.summary));
    }
    lines.join("\n")
}

pub fn run_registry(_args: RegistryArgs, level: LogLevel) -> Result<(), String> {
    let registries = Registries::builtin();

    log(level, LogLevel::Normal, "Registered implementations:");
    println!();
    println!("{}", format_registry(&registries.models));
    println!();
    println!("{}", format_registry(&registries.archs));
    println!();
    println!("{}", format_registry(&registries.datasets));
    println!();
    println!("{}", format_registry(&registries.metrics));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_registry_lists_entries() {
        let registries = Registries::builtin();
        let out = format_registry(&registries.metrics);
        assert!(out.starts_with("metrics:"));
        assert!(out.contains("calculate_psnr"));
        assert!(out.contains("calculate_skimage_ssim_left"));
    }

    #[test]
    fn test_run_registry_succeeds() {
        assert!(run_registry(RegistryArgs {}, LogLevel::Quiet).is_ok());
    }
}
