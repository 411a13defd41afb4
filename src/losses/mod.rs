//! Restoration losses over NCHW image tensors
//!
//! The pixel losses used to fine-tune the stereo super-resolution
//! generator: L1, MSE, Charbonnier, and a weighted total-variation
//! penalty. All support optional element-wise weights and a configurable
//! [`Reduction`].

mod basic;
mod reduction;
mod tv;

pub use basic::{
    charbonnier, l1, mse, weight_reduce, CharbonnierLoss, L1Loss, MseLoss,
    DEFAULT_CHARBONNIER_EPS,
};
pub use reduction::Reduction;
pub use tv::WeightedTvLoss;

use ndarray::Array4;

/// Loss computation errors
#[derive(Debug, thiserror::Error)]
pub enum LossError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("{loss} does not support reduction mode '{reduction}'")]
    UnsupportedReduction {
        loss: &'static str,
        reduction: Reduction,
    },
}

/// Result of a loss forward pass
#[derive(Debug, Clone, PartialEq)]
pub enum LossValue {
    /// Reduced scalar (mean or sum)
    Scalar(f32),
    /// Unreduced elementwise loss map
    Elementwise(Array4<f32>),
}

impl LossValue {
    /// The scalar value, if the loss was reduced
    pub fn scalar(&self) -> Option<f32> {
        match self {
            LossValue::Scalar(v) => Some(*v),
            LossValue::Elementwise(_) => None,
        }
    }

    /// Scale by a loss weight
    #[must_use]
    pub fn scale(self, loss_weight: f32) -> Self {
        match self {
            LossValue::Scalar(v) => LossValue::Scalar(v * loss_weight),
            LossValue::Elementwise(map) => LossValue::Elementwise(map * loss_weight),
        }
    }
}
