use super::Loss;
use crate::error::Result;

/// Squared error.
///
/// The scalar form is `(y - y_hat)²`. The vector form averages that over the outputs, while each
/// gradient entry stays the per-output derivative `-2 (y - y_hat)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MseLoss;

impl MseLoss {
    pub fn new() -> Self {
        Self
    }
}

impl Loss for MseLoss {
    fn name(&self) -> &'static str {
        "MSELoss"
    }

    fn scalar(&self, y: f64, y_hat: f64) -> Result<(f64, f64)> {
        let diff = y - y_hat;
        Ok((diff * diff, -2.0 * diff))
    }
}
