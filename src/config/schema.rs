//! YAML schema definitions for the stereo super-resolution test configuration

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string
/// (`"true"`). Hand-edited configs frequently quote flag values.
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Complete test specification (root document)
///
/// The document is parsed once at process start and treated as immutable
/// for the duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSpec {
    /// Experiment name
    pub name: String,

    /// Model identifier, resolved in the model registry
    pub model_type: String,

    /// Super-resolution scale factor
    pub scale: u32,

    /// GPU count (0 means CPU)
    #[serde(default = "default_num_gpu")]
    pub num_gpu: u32,

    /// Random seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_seed: Option<u64>,

    /// Test datasets keyed by arbitrary labels (`test_0`, `test_1`, ...).
    /// Document order is preserved; it only affects reporting order.
    pub datasets: IndexMap<String, DatasetSpec>,

    /// Generator network architecture
    pub network_g: NetworkSpec,

    /// Checkpoint and resume paths
    pub path: PathSpec,

    /// Validation / metric settings
    pub val: ValidationSpec,

    /// Distributed launch parameters (unused in single-process test mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_params: Option<DistParams>,
}

fn default_num_gpu() -> u32 {
    1
}

/// One test dataset binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Benchmark name (KITTI2012, KITTI2015, Middlebury, Flickr1024, ...)
    pub name: String,

    /// Dataset loader identifier, resolved in the dataset registry
    #[serde(rename = "type")]
    pub dataset_type: String,

    /// Ground-truth (high-resolution) image root
    pub dataroot_gt: PathBuf,

    /// Low-quality (downscaled) image root
    pub dataroot_lq: PathBuf,

    /// Image I/O backend
    pub io_backend: IoBackend,
}

/// Image I/O backend selector
///
/// Closed set: a `disk` entry with no further options must be accepted,
/// and an unrecognized `type` is a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IoBackend {
    /// Plain filesystem reads
    Disk,
    /// LMDB databases, one per dataroot
    Lmdb {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        db_paths: Vec<PathBuf>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        client_keys: Vec<String>,
    },
}

/// Generator network specification
///
/// The architecture identifier is resolved in the architecture registry;
/// the hyperparameters are opaque to this layer and passed through to the
/// external model constructor. Typed accessors cover the well-known keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Architecture identifier
    #[serde(rename = "type")]
    pub arch_type: String,

    /// Constructor hyperparameters, in document order
    #[serde(flatten)]
    pub params: IndexMap<String, serde_json::Value>,
}

// Well-known hyperparameter key names
const PARAM_UPSCALE: &str = "upscale";
const PARAM_IN_CHANS: &str = "in_chans";
const PARAM_IMG_SIZE: &str = "img_size";
const PARAM_WINDOW_SIZE: &str = "window_size";
const PARAM_COMPRESS_RATIO: &str = "compress_ratio";
const PARAM_SQUEEZE_FACTOR: &str = "squeeze_factor";
const PARAM_CONV_SCALE: &str = "conv_scale";
const PARAM_OVERLAP_RATIO: &str = "overlap_ratio";
const PARAM_DROP_PATH_RATE: &str = "drop_path_rate";
const PARAM_EMBED_DIM: &str = "embed_dim";
const PARAM_MLP_RATIO: &str = "mlp_ratio";
const PARAM_IMG_RANGE: &str = "img_range";
const PARAM_DEPTHS: &str = "depths";
const PARAM_NUM_HEADS: &str = "num_heads";
const PARAM_UPSAMPLER: &str = "upsampler";
const PARAM_RESI_CONNECTION: &str = "resi_connection";

impl NetworkSpec {
    fn u64_param(&self, key: &str) -> Option<u64> {
        self.params.get(key).and_then(serde_json::Value::as_u64)
    }

    fn u64_seq_param(&self, key: &str) -> Option<Vec<u64>> {
        let seq = self.params.get(key)?.as_array()?;
        seq.iter().map(serde_json::Value::as_u64).collect()
    }

    fn str_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(serde_json::Value::as_str)
    }

    // as_f64 also accepts integer literals (mlp_ratio: 2)
    fn f64_param(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(serde_json::Value::as_f64)
    }

    /// Upscale factor the network was built for
    pub fn upscale(&self) -> Option<u64> {
        self.u64_param(PARAM_UPSCALE)
    }

    /// Input channel count
    pub fn in_chans(&self) -> Option<u64> {
        self.u64_param(PARAM_IN_CHANS)
    }

    /// Training patch size
    pub fn img_size(&self) -> Option<u64> {
        self.u64_param(PARAM_IMG_SIZE)
    }

    /// Attention window size
    pub fn window_size(&self) -> Option<u64> {
        self.u64_param(PARAM_WINDOW_SIZE)
    }

    /// Channel-attention compression ratio
    pub fn compress_ratio(&self) -> Option<u64> {
        self.u64_param(PARAM_COMPRESS_RATIO)
    }

    /// Squeeze-and-excitation factor
    pub fn squeeze_factor(&self) -> Option<u64> {
        self.u64_param(PARAM_SQUEEZE_FACTOR)
    }

    /// Convolution branch scaling
    pub fn conv_scale(&self) -> Option<f64> {
        self.f64_param(PARAM_CONV_SCALE)
    }

    /// Overlapping cross-attention ratio
    pub fn overlap_ratio(&self) -> Option<f64> {
        self.f64_param(PARAM_OVERLAP_RATIO)
    }

    /// Stochastic depth rate
    pub fn drop_path_rate(&self) -> Option<f64> {
        self.f64_param(PARAM_DROP_PATH_RATE)
    }

    /// Embedding dimension
    pub fn embed_dim(&self) -> Option<u64> {
        self.u64_param(PARAM_EMBED_DIM)
    }

    /// MLP width as a multiple of the embedding dimension
    pub fn mlp_ratio(&self) -> Option<f64> {
        self.f64_param(PARAM_MLP_RATIO)
    }

    /// Image value range (1.0 or 255.0)
    pub fn img_range(&self) -> Option<f64> {
        self.f64_param(PARAM_IMG_RANGE)
    }

    /// Per-stage block depths
    pub fn depths(&self) -> Option<Vec<u64>> {
        self.u64_seq_param(PARAM_DEPTHS)
    }

    /// Per-stage attention head counts
    pub fn num_heads(&self) -> Option<Vec<u64>> {
        self.u64_seq_param(PARAM_NUM_HEADS)
    }

    /// Upsampler mode
    pub fn upsampler(&self) -> Option<&str> {
        self.str_param(PARAM_UPSAMPLER)
    }

    /// Residual-connection style
    pub fn resi_connection(&self) -> Option<&str> {
        self.str_param(PARAM_RESI_CONNECTION)
    }
}

/// Checkpoint and state paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Pretrained generator checkpoint
    pub pretrain_network_g: PathBuf,

    /// Fail on parameter-name mismatches when loading the checkpoint
    #[serde(
        default = "default_true",
        deserialize_with = "deserialize_bool_lenient"
    )]
    pub strict_load_g: bool,

    /// Training state to resume from (`~` for none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_state: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

/// Validation settings: what to save and which metrics to report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSpec {
    /// Write restored images to the results directory
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub save_img: bool,

    /// Average predictions over flip/rotation augmentations
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub self_ensemble: bool,

    /// Split inputs into overlapping grids before inference
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub grids: bool,

    /// Metrics keyed by report label, in document order
    pub metrics: IndexMap<String, MetricSpec>,
}

/// One metric binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Metric identifier, resolved in the metric registry
    #[serde(rename = "type")]
    pub metric_type: String,

    /// Pixels to crop from each border before measuring
    #[serde(default)]
    pub crop_border: u32,

    /// Measure on the luminance channel only
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub test_y_channel: bool,

    /// Whether higher or lower values are better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub better: Option<String>,
}

/// Distributed launch parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistParams {
    /// Process-group backend
    pub backend: String,

    /// Rendezvous port
    pub port: u16,
}
