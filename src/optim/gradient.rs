use super::{backprop, Optimizer};
use crate::{
    error::{NetError, Result},
    loss::Loss,
    network::Network,
    workspace::Workspace,
};

/// Plain gradient descent: `W[i] -= learning_rate * dW[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientOptimizer {
    pub learning_rate: f64,
}

impl GradientOptimizer {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientOptimizer {
    fn computes_da(&self) -> bool {
        true
    }

    fn computes_dw(&self) -> bool {
        true
    }

    fn compute_gradients(
        &self,
        network: &Network,
        workspace: &mut Workspace,
        loss: &dyn Loss,
        y: &[f64],
    ) -> Result<()> {
        backprop(network, workspace, loss, y)
    }

    fn update_weights(
        &self,
        _epoch: usize,
        network: &mut Network,
        workspace: &mut Workspace,
    ) -> Result<()> {
        let dw = workspace.dw.as_ref().ok_or(NetError::MissingBuffer("dw"))?;

        for (w, g) in network.weights.iter_mut().zip(dw) {
            w.scaled_add(-self.learning_rate, g);
        }

        Ok(())
    }
}
