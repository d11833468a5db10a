use super::Loss;
use crate::{
    error::{NetError, Result},
    math::softmax,
};

/// Softmax followed by cross-entropy, for classification against a one-hot target.
///
/// With `j` the hot index of `y`: `loss = -ln(softmax(y_hat)[j])` and the gradient with respect to
/// the logits is `softmax(y_hat) - y`. There is no scalar form.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftmaxLoss;

impl SoftmaxLoss {
    pub fn new() -> Self {
        Self
    }
}

impl Loss for SoftmaxLoss {
    fn name(&self) -> &'static str {
        "SoftmaxLoss"
    }

    /// Accepts only one-hot targets: a single `1.0`, every other entry `0.0`.
    fn check_target(&self, y: &[f64]) -> Result<()> {
        let hot = y.iter().filter(|&&t| t == 1.0).count();
        let cold = y.iter().filter(|&&t| t == 0.0).count();

        if hot != 1 || hot + cold != y.len() {
            return Err(NetError::InvalidTarget {
                loss: self.name(),
                reason: format!("expected a one-hot vector, got {y:?}"),
            });
        }
        Ok(())
    }

    /// Pre-condition: `y` has the same length as `y_hat`.
    fn vector(&self, y: &[f64], y_hat: &[f64]) -> Result<(f64, Vec<f64>)> {
        assert_eq!(y.len(), y_hat.len(), "SoftmaxLoss: target and prediction differ in length");
        self.check_target(y)?;

        let j = y.iter().position(|&t| t == 1.0).unwrap_or_default();

        // log-sum-exp keeps the loss finite when softmax(y_hat)[j] underflows.
        let max = y_hat.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let log_sum = y_hat.iter().map(|&v| (v - max).exp()).sum::<f64>().ln();
        let loss = max + log_sum - y_hat[j];

        let mut grad = softmax(y_hat);
        grad[j] -= 1.0;

        Ok((loss, grad))
    }
}
