use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{GradientOptimizer, MomentumOptimizer, Optimizer};
use crate::error::NetError;

const DEFAULT_LEARNING_RATE: f64 = 0.01;
const DEFAULT_ALPHA: f64 = 0.5;

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

/// Selects the optimizer and its hyperparameters.
///
/// In JSON: `{"type": "gradient", "learning_rate": 0.01}` or
/// `{"type": "momentum", "learning_rate": 0.01, "alpha": 0.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptimizerType {
    Gradient {
        #[serde(default = "default_learning_rate")]
        learning_rate: f64,
    },
    Momentum {
        #[serde(default = "default_learning_rate")]
        learning_rate: f64,
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
}

impl Default for OptimizerType {
    fn default() -> Self {
        OptimizerType::Gradient {
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

impl OptimizerType {
    pub fn build(&self) -> Box<dyn Optimizer> {
        match *self {
            OptimizerType::Gradient { learning_rate } => {
                Box::new(GradientOptimizer::new(learning_rate))
            }
            OptimizerType::Momentum {
                learning_rate,
                alpha,
            } => Box::new(MomentumOptimizer::new(learning_rate, alpha)),
        }
    }
}

/// Parses an optimizer name into its default hyperparameters.
impl FromStr for OptimizerType {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradient" => Ok(OptimizerType::default()),
            "momentum" => Ok(OptimizerType::Momentum {
                learning_rate: DEFAULT_LEARNING_RATE,
                alpha: DEFAULT_ALPHA,
            }),
            other => Err(NetError::UnknownOptimizer(other.to_string())),
        }
    }
}
