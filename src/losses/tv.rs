//! Weighted total-variation loss

use super::basic::L1Loss;
use super::reduction::Reduction;
use super::{LossError, LossValue};
use ndarray::{s, Array4};

/// Weighted TV loss: L1 over vertical and horizontal neighbor differences.
///
/// Only `mean` and `sum` reductions are supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTvLoss {
    inner: L1Loss,
}

impl WeightedTvLoss {
    pub fn new(loss_weight: f32, reduction: Reduction) -> Result<Self, LossError> {
        if reduction == Reduction::None {
            return Err(LossError::UnsupportedReduction {
                loss: "WeightedTvLoss",
                reduction,
            });
        }
        Ok(Self {
            inner: L1Loss::new(loss_weight, reduction),
        })
    }

    pub fn forward(
        &self,
        pred: &Array4<f32>,
        weight: Option<&Array4<f32>>,
    ) -> Result<f32, LossError> {
        let (y_weight, x_weight) = match weight {
            Some(w) => (
                Some(w.slice(s![.., .., ..-1, ..]).to_owned()),
                Some(w.slice(s![.., .., .., ..-1]).to_owned()),
            ),
            None => (None, None),
        };

        let y_diff = self.inner.forward(
            &pred.slice(s![.., .., ..-1, ..]).to_owned(),
            &pred.slice(s![.., .., 1.., ..]).to_owned(),
            y_weight.as_ref(),
        )?;
        let x_diff = self.inner.forward(
            &pred.slice(s![.., .., .., ..-1]).to_owned(),
            &pred.slice(s![.., .., .., 1..]).to_owned(),
            x_weight.as_ref(),
        )?;

        match (y_diff, x_diff) {
            (LossValue::Scalar(y), LossValue::Scalar(x)) => Ok(x + y),
            // The constructor rejects Reduction::None, so the inner loss
            // always reduces to scalars.
            _ => Err(LossError::UnsupportedReduction {
                loss: "WeightedTvLoss",
                reduction: Reduction::None,
            }),
        }
    }
}

impl Default for WeightedTvLoss {
    fn default() -> Self {
        Self {
            inner: L1Loss::new(1.0, Reduction::Mean),
        }
    }
}
