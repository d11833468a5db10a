use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Loss, MseLoss, SoftmaxLoss};
use crate::error::NetError;

/// Selects which loss function the trainer uses.
///
/// - `Mse`     - squared error; the target is any real vector.
/// - `Softmax` - softmax cross-entropy; the target must be one-hot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Mse,
    Softmax,
}

impl LossType {
    pub fn build(&self) -> Box<dyn Loss> {
        match self {
            LossType::Mse => Box::new(MseLoss::new()),
            LossType::Softmax => Box::new(SoftmaxLoss::new()),
        }
    }
}

impl FromStr for LossType {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mse" => Ok(LossType::Mse),
            "softmax" => Ok(LossType::Softmax),
            other => Err(NetError::UnknownLoss(other.to_string())),
        }
    }
}
