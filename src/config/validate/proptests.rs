//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::{
    DatasetSpec, IoBackend, MetricSpec, NetworkSpec, PathSpec, TestSpec, ValidationSpec,
};
use crate::registry::Registries;
use indexmap::IndexMap;
use proptest::prelude::*;
use std::path::PathBuf;

fn arb_valid_spec() -> impl Strategy<Value = TestSpec> {
    (
        prop_oneof![Just(1u32), Just(2), Just(4), Just(8)], // scale
        0u32..8,                                            // num_gpu
        proptest::option::of(any::<u64>()),                 // manual_seed
        1usize..5,                                          // dataset count
        1u64..32,                                           // window_size
    )
        .prop_map(|(scale, num_gpu, manual_seed, n_datasets, window_size)| {
            let mut datasets = IndexMap::new();
            for i in 0..n_datasets {
                datasets.insert(
                    format!("test_{i}"),
                    DatasetSpec {
                        name: "KITTI2012".to_string(),
                        dataset_type: "TestPairedStereoImageDataset".to_string(),
                        dataroot_gt: PathBuf::from("hr"),
                        dataroot_lq: PathBuf::from(format!("lr_x{scale}")),
                        io_backend: IoBackend::Disk,
                    },
                );
            }

            let mut params = IndexMap::new();
            params.insert("upscale".to_string(), serde_json::json!(scale));
            params.insert("window_size".to_string(), serde_json::json!(window_size));

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

            TestSpec {
                name: "prop_spec".to_string(),
                model_type: "StereoSRModel".to_string(),
                scale,
                num_gpu,
                manual_seed,
                datasets,
                network_g: NetworkSpec {
                    arch_type: "ASteISRHAT".to_string(),
                    params,
                },
                path: PathSpec {
                    pretrain_network_g: PathBuf::from("net_g.pth"),
                    strict_load_g: true,
                    resume_state: None,
                },
                val: ValidationSpec {
                    save_img: false,
                    self_ensemble: false,
                    grids: false,
                    metrics,
                },
                dist_params: None,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec, &Registries::builtin()).is_ok());
    }

    #[test]
    fn prop_empty_datasets_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.datasets.clear();
        prop_assert!(matches!(
            validate_config(&spec, &Registries::builtin()),
            Err(ValidationError::NoDatasets)
        ));
    }

    #[test]
    fn prop_zero_window_size_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.network_g.params.insert("window_size".to_string(), serde_json::json!(0));
        prop_assert!(matches!(
            validate_config(&spec, &Registries::builtin()),
            Err(ValidationError::InvalidWindowSize(0))
        ));
    }

    #[test]
    fn prop_unregistered_arch_fails(spec in arb_valid_spec(), suffix in "[a-z]{1,8}") {
        let mut spec = spec;
        spec.network_g.arch_type = format!("Unknown_{suffix}");
        prop_assert!(matches!(
            validate_config(&spec, &Registries::builtin()),
            Err(ValidationError::Unregistered(_))
        ));
    }

    #[test]
    fn prop_mismatched_upscale_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        let bumped = u64::from(spec.scale) + 1;
        spec.network_g.params.insert("upscale".to_string(), serde_json::json!(bumped));
        let result = validate_config(&spec, &Registries::builtin());
        prop_assert!(
            matches!(result, Err(ValidationError::ScaleMismatch { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    #[test]
    fn prop_roundtrip_identity(spec in arb_valid_spec()) {
        let rendered = serde_yaml::to_string(&spec).unwrap();
        let reparsed: TestSpec = serde_yaml::from_str(&rendered).unwrap();
        prop_assert_eq!(spec, reparsed);
    }
}
