//! Validation error types
//!
//! Defines all validation error variants for test specifications.

use crate::registry::RegistryError;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Experiment name cannot be empty")]
    EmptyName,

    #[error("Invalid scale: {0} (must be one of: 1, 2, 4, 8)")]
    InvalidScale(u32),

    #[error("Scale mismatch: scale is {scale} but network_g.upscale is {upscale}")]
    ScaleMismatch { scale: u32, upscale: u64 },

    #[error(transparent)]
    Unregistered(#[from] RegistryError),

    #[error("No test datasets defined")]
    NoDatasets,

    #[error("Dataset '{0}' has an empty name")]
    EmptyDatasetName(String),

    #[error("Dataset '{label}' ground-truth root does not exist: {path}")]
    GtRootNotFound { label: String, path: String },

    #[error("Dataset '{label}' low-quality root does not exist: {path}")]
    LqRootNotFound { label: String, path: String },

    #[error("Pretrained checkpoint does not exist: {0}")]
    CheckpointNotFound(String),

    #[error("Invalid window_size: {0} (must be > 0)")]
    InvalidWindowSize(u64),

    #[error("Invalid embed_dim: {0} (must be > 0)")]
    InvalidEmbedDim(u64),

    #[error("Invalid img_range: {0} (must be > 0.0)")]
    InvalidImgRange(f64),

    #[error("depths has {depths} stages but num_heads has {heads}")]
    StageCountMismatch { depths: usize, heads: usize },

    #[error(
        "Invalid upsampler: '{0}' (must be one of: pixelshuffle, pixelshuffledirect, nearest+conv)"
    )]
    InvalidUpsampler(String),

    #[error("Invalid resi_connection: '{0}' (must be one of: 1conv, 3conv, identity)")]
    InvalidResiConnection(String),

    #[error("Metric '{label}' has invalid better preference: '{value}' (must be higher or lower)")]
    InvalidMetricBetter { label: String, value: String },

    #[error("Invalid dist backend: '{0}' (must be one of: nccl, gloo, mpi)")]
    InvalidDistBackend(String),

    #[error("Invalid dist port: 0")]
    InvalidDistPort,
}
