use serde::{Deserialize, Serialize};

use crate::{loss::LossType, optim::OptimizerType};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`    - number of full passes over the training data, one weight update each
/// - `loss`      - which loss function to use
/// - `optimizer` - which optimizer to use, with its hyperparameters
/// - `progress`  - whether to log each epoch's loss at `info` level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub loss: LossType,
    pub optimizer: OptimizerType,
    pub progress: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 10,
            loss: LossType::Mse,
            optimizer: OptimizerType::default(),
            progress: true,
        }
    }
}

impl TrainConfig {
    /// Creates a `TrainConfig` that trains quietly.
    pub fn new(epochs: usize, loss: LossType, optimizer: OptimizerType) -> Self {
        TrainConfig {
            epochs,
            loss,
            optimizer,
            progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config: TrainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrainConfig::default());
    }

    #[test]
    fn parses_a_full_config() {
        let config: TrainConfig = serde_json::from_str(
            r#"{
                "epochs": 100,
                "loss": "softmax",
                "optimizer": {"type": "momentum", "learning_rate": 0.05, "alpha": 0.9},
                "progress": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            TrainConfig::new(
                100,
                LossType::Softmax,
                OptimizerType::Momentum {
                    learning_rate: 0.05,
                    alpha: 0.9
                }
            )
        );
    }
}
