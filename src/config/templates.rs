//! Template generation for test configurations
//!
//! Produces complete, validated starter documents for the supported
//! benchmarks, reproducing the published ASteISRHAT hyperparameters.

use super::schema::{
    DatasetSpec, DistParams, IoBackend, MetricSpec, NetworkSpec, PathSpec, TestSpec,
    ValidationSpec,
};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Benchmark test sets with paired stereo data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Benchmark {
    Kitti2012,
    Kitti2015,
    Middlebury,
    Flickr1024,
}

impl Benchmark {
    /// All supported benchmarks, in canonical reporting order
    pub const ALL: [Benchmark; 4] = [
        Benchmark::Kitti2012,
        Benchmark::Kitti2015,
        Benchmark::Middlebury,
        Benchmark::Flickr1024,
    ];

    /// Dataset name as it appears in configurations and reports
    pub fn name(self) -> &'static str {
        match self {
            Benchmark::Kitti2012 => "KITTI2012",
            Benchmark::Kitti2015 => "KITTI2015",
            Benchmark::Middlebury => "Middlebury",
            Benchmark::Flickr1024 => "Flickr1024",
        }
    }
}

impl std::str::FromStr for Benchmark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kitti2012" => Ok(Benchmark::Kitti2012),
            "kitti2015" => Ok(Benchmark::Kitti2015),
            "middlebury" => Ok(Benchmark::Middlebury),
            "flickr1024" => Ok(Benchmark::Flickr1024),
            _ => Err(format!(
                "Unknown benchmark: {s}. Valid benchmarks: kitti2012, kitti2015, middlebury, flickr1024"
            )),
        }
    }
}

/// Generate a test specification for the given benchmarks and scale
pub fn generate_spec(benchmarks: &[Benchmark], scale: u32) -> TestSpec {
    let mut datasets = IndexMap::new();
    for (i, benchmark) in benchmarks.iter().enumerate() {
        datasets.insert(format!("test_{i}"), dataset_spec(*benchmark, scale));
    }

    TestSpec {
        name: format!("ASteISRHAT_SRx{scale}_StereoSR"),
        model_type: "StereoSRModel".to_string(),
        scale,
        num_gpu: 1,
        manual_seed: Some(0),
        datasets,
        network_g: network_spec(scale),
        path: PathSpec {
            pretrain_network_g: PathBuf::from(format!(
                "experiments/pretrained_models/ASteISRHAT_SRx{scale}.pth"
            )),
            strict_load_g: true,
            resume_state: None,
        },
        val: ValidationSpec {
            save_img: true,
            self_ensemble: false,
            grids: false,
            metrics: default_metrics(),
        },
        dist_params: Some(DistParams {
            backend: "nccl".to_string(),
            port: 29500,
        }),
    }
}

/// Generate a YAML document for the given benchmarks and scale
pub fn generate_yaml(benchmarks: &[Benchmark], scale: u32) -> String {
    let spec = generate_spec(benchmarks, scale);
    serde_yaml::to_string(&spec).unwrap_or_else(|_err| "# Error generating YAML".to_string())
}

fn dataset_spec(benchmark: Benchmark, scale: u32) -> DatasetSpec {
    let name = benchmark.name();
    DatasetSpec {
        name: name.to_string(),
        dataset_type: "TestPairedStereoImageDataset".to_string(),
        dataroot_gt: PathBuf::from(format!("datasets/StereoSR/test/{name}/hr")),
        dataroot_lq: PathBuf::from(format!("datasets/StereoSR/test/{name}/lr_x{scale}")),
        io_backend: IoBackend::Disk,
    }
}

/// The published ASteISRHAT hyperparameters, parameterized by scale
fn network_spec(scale: u32) -> NetworkSpec {
    let mut params = IndexMap::new();
    params.insert("upscale".to_string(), serde_json::json!(scale));
    params.insert("in_chans".to_string(), serde_json::json!(3));
    params.insert("img_size".to_string(), serde_json::json!(64));
    params.insert("window_size".to_string(), serde_json::json!(16));
    params.insert("compress_ratio".to_string(), serde_json::json!(3));
    params.insert("squeeze_factor".to_string(), serde_json::json!(30));
    params.insert("conv_scale".to_string(), serde_json::json!(0.01));
    params.insert("overlap_ratio".to_string(), serde_json::json!(0.5));
    params.insert("drop_path_rate".to_string(), serde_json::json!(0.1));
    params.insert("img_range".to_string(), serde_json::json!(1.0));
    params.insert("depths".to_string(), serde_json::json!([6, 6, 6, 6, 6, 6]));
    params.insert("embed_dim".to_string(), serde_json::json!(180));
    params.insert(
        "num_heads".to_string(),
        serde_json::json!([6, 6, 6, 6, 6, 6]),
    );
    params.insert("mlp_ratio".to_string(), serde_json::json!(2));
    params.insert("upsampler".to_string(), serde_json::json!("pixelshuffle"));
    params.insert("resi_connection".to_string(), serde_json::json!("1conv"));

    NetworkSpec {
        arch_type: "ASteISRHAT".to_string(),
        params,
    }
}

fn default_metrics() -> IndexMap<String, MetricSpec> {
    let mut metrics = IndexMap::new();
    metrics.insert(
        "psnr".to_string(),
        MetricSpec {
            metric_type: "calculate_psnr".to_string(),
            crop_border: 0,
            test_y_channel: false,
            better: None,
        },
    );
    metrics.insert(
        "psnr_left".to_string(),
        MetricSpec {
            metric_type: "calculate_psnr_left".to_string(),
            crop_border: 0,
            test_y_channel: false,
            better: None,
        },
    );
    metrics.insert(
        "ssim".to_string(),
        MetricSpec {
            metric_type: "calculate_skimage_ssim".to_string(),
            crop_border: 0,
            test_y_channel: false,
            better: None,
        },
    );
    metrics.insert(
        "ssim_left".to_string(),
        MetricSpec {
            metric_type: "calculate_skimage_ssim_left".to_string(),
            crop_border: 0,
            test_y_channel: false,
            better: None,
        },
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate::validate_config;
    use crate::registry::Registries;

    #[test]
    fn test_generated_spec_is_valid() {
        for scale in [2, 4] {
            let spec = generate_spec(&Benchmark::ALL, scale);
            validate_config(&spec, &Registries::builtin())
                .unwrap_or_else(|e| panic!("x{scale} template invalid: {e}"));
        }
    }

    #[test]
    fn test_generated_spec_covers_all_benchmarks() {
        let spec = generate_spec(&Benchmark::ALL, 4);
        assert_eq!(spec.datasets.len(), 4);
        let names: Vec<_> = spec.datasets.values().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["KITTI2012", "KITTI2015", "Middlebury", "Flickr1024"]
        );
        assert_eq!(spec.val.metrics.len(), 4);
    }

    #[test]
    fn test_generated_spec_scale_flows_through() {
        let spec = generate_spec(&[Benchmark::Kitti2015], 2);
        assert_eq!(spec.scale, 2);
        assert_eq!(spec.network_g.upscale(), Some(2));
        assert_eq!(
            spec.datasets["test_0"].dataroot_lq,
            PathBuf::from("datasets/StereoSR/test/KITTI2015/lr_x2")
        );
        assert!(spec
            .path
            .pretrain_network_g
            .to_string_lossy()
            .contains("SRx2"));
    }

    #[test]
    fn test_generated_yaml_roundtrips() {
        let yaml = generate_yaml(&Benchmark::ALL, 4);
        let spec: TestSpec = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(spec, generate_spec(&Benchmark::ALL, 4));
    }

    #[test]
    fn test_benchmark_parsing() {
        use std::str::FromStr;
        assert_eq!(Benchmark::from_str("kitti2012"), Ok(Benchmark::Kitti2012));
        assert_eq!(Benchmark::from_str("Flickr1024"), Ok(Benchmark::Flickr1024));
        assert!(Benchmark::from_str("div2k").is_err());
    }
}
