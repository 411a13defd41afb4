//! Pixel losses: L1, MSE, and Charbonnier
//!
//! All losses operate on NCHW tensors and support optional element-wise
//! weights plus the standard reduction modes.

use super::reduction::Reduction;
use super::{LossError, LossValue};
use ndarray::Array4;

/// Default curvature control for the Charbonnier penalty
pub const DEFAULT_CHARBONNIER_EPS: f32 = 1e-12;

fn check_same_shape(pred: &Array4<f32>, other: &Array4<f32>) -> Result<(), LossError> {
    if pred.shape() != other.shape() {
        return Err(LossError::ShapeMismatch {
            expected: pred.shape().to_vec(),
            got: other.shape().to_vec(),
        });
    }
    Ok(())
}

/// Elementwise absolute error
pub fn l1(pred: &Array4<f32>, target: &Array4<f32>) -> Array4<f32> {
    (pred - target).mapv(f32::abs)
}

/// Elementwise squared error
pub fn mse(pred: &Array4<f32>, target: &Array4<f32>) -> Array4<f32> {
    let diff = pred - target;
    &diff * &diff
}

/// Elementwise Charbonnier penalty, a differentiable robust L1 variant
pub fn charbonnier(pred: &Array4<f32>, target: &Array4<f32>, eps: f32) -> Array4<f32> {
    let diff = pred - target;
    (&diff * &diff + eps).mapv(f32::sqrt)
}

/// Apply optional element-wise weights and a reduction to a loss map.
///
/// With weights, the mean is the weighted sum divided by the weight sum,
/// so zero-weighted elements do not dilute the average.
pub fn weight_reduce(
    mut loss: Array4<f32>,
    weight: Option<&Array4<f32>>,
    reduction: Reduction,
) -> Result<LossValue, LossError> {
    if let Some(w) = weight {
        check_same_shape(&loss, w)?;
        loss = &loss * w;
    }

    let value = match reduction {
        Reduction::None => LossValue::Elementwise(loss),
        Reduction::Sum => LossValue::Scalar(loss.sum()),
        Reduction::Mean => match weight {
            Some(w) => {
                let denom = w.sum();
                if denom == 0.0 {
                    LossValue::Scalar(0.0)
                } else {
                    LossValue::Scalar(loss.sum() / denom)
                }
            }
            None => LossValue::Scalar(loss.mean().unwrap_or(0.0)),
        },
    };
    Ok(value)
}

/// L1 (mean absolute error) loss
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct L1Loss {
    pub loss_weight: f32,
    pub reduction: Reduction,
}

impl L1Loss {
    pub fn new(loss_weight: f32, reduction: Reduction) -> Self {
        Self {
            loss_weight,
            reduction,
        }
    }

    pub fn forward(
        &self,
        pred: &Array4<f32>,
        target: &Array4<f32>,
        weight: Option<&Array4<f32>>,
    ) -> Result<LossValue, LossError> {
        check_same_shape(pred, target)?;
        let value = weight_reduce(l1(pred, target), weight, self.reduction)?;
        Ok(value.scale(self.loss_weight))
    }
}

impl Default for L1Loss {
    fn default() -> Self {
        Self::new(1.0, Reduction::Mean)
    }
}

/// MSE (L2) loss
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MseLoss {
    pub loss_weight: f32,
    pub reduction: Reduction,
}

impl MseLoss {
    pub fn new(loss_weight: f32, reduction: Reduction) -> Self {
        Self {
            loss_weight,
            reduction,
        }
    }

    pub fn forward(
        &self,
        pred: &Array4<f32>,
        target: &Array4<f32>,
        weight: Option<&Array4<f32>>,
    ) -> Result<LossValue, LossError> {
        check_same_shape(pred, target)?;
        let value = weight_reduce(mse(pred, target), weight, self.reduction)?;
        Ok(value.scale(self.loss_weight))
    }
}

impl Default for MseLoss {
    fn default() -> Self {
        Self::new(1.0, Reduction::Mean)
    }
}

/// Charbonnier loss, described in "Deep Laplacian Pyramid Networks for
/// Fast and Accurate Super-Resolution"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharbonnierLoss {
    pub loss_weight: f32,
    pub reduction: Reduction,
    /// Controls the curvature near zero
    pub eps: f32,
}

impl CharbonnierLoss {
    pub fn new(loss_weight: f32, reduction: Reduction, eps: f32) -> Self {
        Self {
            loss_weight,
            reduction,
            eps,
        }
    }

    pub fn forward(
        &self,
        pred: &Array4<f32>,
        target: &Array4<f32>,
        weight: Option<&Array4<f32>>,
    ) -> Result<LossValue, LossError> {
        check_same_shape(pred, target)?;
        let value = weight_reduce(charbonnier(pred, target, self.eps), weight, self.reduction)?;
        Ok(value.scale(self.loss_weight))
    }
}

impl Default for CharbonnierLoss {
    fn default() -> Self {
        Self::new(1.0, Reduction::Mean, DEFAULT_CHARBONNIER_EPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array4;

    fn pred_target() -> (Array4<f32>, Array4<f32>) {
        let pred = Array4::from_shape_vec((1, 1, 2, 2), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let target = Array4::from_shape_vec((1, 1, 2, 2), vec![1.0, 1.0, 0.0, 5.0]).unwrap();
        (pred, target)
    }

    #[test]
    fn test_l1_identical_inputs_is_zero() {
        let (pred, _) = pred_target();
        let loss = L1Loss::default()
            .forward(&pred, &pred.clone(), None)
            .unwrap();
        assert_relative_eq!(loss.scalar().unwrap(), 0.0);
    }

    #[test]
    fn test_l1_mean() {
        let (pred, target) = pred_target();
        // |diffs| = [1, 0, 2, 2], mean = 1.25
        let loss = L1Loss::default().forward(&pred, &target, None).unwrap();
        assert_relative_eq!(loss.scalar().unwrap(), 1.25);
    }

    #[test]
    fn test_l1_sum_and_loss_weight() {
        let (pred, target) = pred_target();
        let loss = L1Loss::new(0.5, Reduction::Sum)
            .forward(&pred, &target, None)
            .unwrap();
        // sum = 5.0, scaled by 0.5
        assert_relative_eq!(loss.scalar().unwrap(), 2.5);
    }

    #[test]
    fn test_mse_mean() {
        let (pred, target) = pred_target();
        // squared diffs = [1, 0, 4, 4], mean = 2.25
        let loss = MseLoss::default().forward(&pred, &target, None).unwrap();
        assert_relative_eq!(loss.scalar().unwrap(), 2.25);
    }

    #[test]
    fn test_charbonnier_approaches_l1_for_large_diffs() {
        let (pred, target) = pred_target();
        let charb = CharbonnierLoss::default()
            .forward(&pred, &target, None)
            .unwrap()
            .scalar()
            .unwrap();
        let l1 = L1Loss::default()
            .forward(&pred, &target, None)
            .unwrap()
            .scalar()
            .unwrap();
        assert_relative_eq!(charb, l1, epsilon = 1e-4);
    }

    #[test]
    fn test_charbonnier_at_zero_is_sqrt_eps() {
        let pred = Array4::zeros((1, 1, 1, 1));
        let loss = CharbonnierLoss::new(1.0, Reduction::Mean, 1e-6)
            .forward(&pred, &pred.clone(), None)
            .unwrap();
        assert_relative_eq!(loss.scalar().unwrap(), 1e-3, epsilon = 1e-7);
    }

    #[test]
    fn test_weighted_mean_ignores_zero_weighted_elements() {
        let (pred, target) = pred_target();
        let weight =
            Array4::from_shape_vec((1, 1, 2, 2), vec![1.0, 1.0, 0.0, 0.0]).unwrap();
        // weighted |diffs| = [1, 0, -, -], weight sum = 2, mean = 0.5
        let loss = L1Loss::default()
            .forward(&pred, &target, Some(&weight))
            .unwrap();
        assert_relative_eq!(loss.scalar().unwrap(), 0.5);
    }

    #[test]
    fn test_all_zero_weights_give_zero_mean() {
        let (pred, target) = pred_target();
        let weight = Array4::zeros((1, 1, 2, 2));
        let loss = L1Loss::default()
            .forward(&pred, &target, Some(&weight))
            .unwrap();
        assert_relative_eq!(loss.scalar().unwrap(), 0.0);
    }

    #[test]
    fn test_reduction_none_returns_elementwise_map() {
        let (pred, target) = pred_target();
        let loss = L1Loss::new(1.0, Reduction::None)
            .forward(&pred, &target, None)
            .unwrap();
        match loss {
            LossValue::Elementwise(map) => {
                assert_eq!(map.shape(), &[1, 1, 2, 2]);
                assert_relative_eq!(map[[0, 0, 1, 1]], 2.0);
            }
            LossValue::Scalar(_) => panic!("expected elementwise map"),
        }
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let pred = Array4::<f32>::zeros((1, 1, 2, 2));
        let target = Array4::<f32>::zeros((1, 1, 4, 4));
        let result = L1Loss::default().forward(&pred, &target, None);
        assert!(matches!(result, Err(LossError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_weight_shape_mismatch_rejected() {
        let (pred, target) = pred_target();
        let weight = Array4::<f32>::zeros((1, 3, 2, 2));
        let result = MseLoss::default().forward(&pred, &target, Some(&weight));
        assert!(matches!(result, Err(LossError::ShapeMismatch { .. })));
    }
}
