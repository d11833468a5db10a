use super::{backprop, Optimizer};
use crate::{
    error::{NetError, Result},
    loss::Loss,
    network::Network,
    workspace::Workspace,
};

/// Gradient descent with momentum.
///
/// Per layer: `v[i] = alpha * v[i] - learning_rate * dW[i]`, then `W[i] += v[i]`. The velocity lives
/// in the epoch workspace and starts at zero, so the first update equals plain gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumOptimizer {
    pub learning_rate: f64,
    pub alpha: f64,
}

impl MomentumOptimizer {
    /// Creates a new `MomentumOptimizer`.
    ///
    /// # Arguments
    /// * `learning_rate` - Step size applied to the gradient.
    /// * `alpha` - Fraction of the previous velocity kept at each update.
    pub fn new(learning_rate: f64, alpha: f64) -> Self {
        Self {
            learning_rate,
            alpha,
        }
    }
}

impl Optimizer for MomentumOptimizer {
    fn computes_da(&self) -> bool {
        true
    }

    fn computes_dw(&self) -> bool {
        true
    }

    fn computes_v(&self) -> bool {
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
        let Workspace { dw, v, .. } = workspace;
        let dw = dw.as_ref().ok_or(NetError::MissingBuffer("dw"))?;
        let v = v.as_mut().ok_or(NetError::MissingBuffer("v"))?;

        for ((w, g), v) in network.weights.iter_mut().zip(dw).zip(v.iter_mut()) {
            *v *= self.alpha;
            v.scaled_add(-self.learning_rate, g);
            *w += &*v;
        }

        Ok(())
    }
}
