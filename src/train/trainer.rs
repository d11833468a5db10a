use log::{debug, trace};

use crate::{
    error::{NetError, Result},
    loss::Loss,
    network::Network,
    optim::Optimizer,
    workspace::Workspace,
};

/// Drives full-batch training of one network: every call to [`Trainer::train`] runs one epoch and
/// applies exactly one weight update.
///
/// The trainer borrows the network for its lifetime and owns the epoch workspace, so momentum
/// state survives from one epoch to the next.
pub struct Trainer<'n> {
    network: &'n mut Network,
    loss: Box<dyn Loss>,
    optimizer: Box<dyn Optimizer>,
    workspace: Workspace,
    needs_da: bool,
    needs_dw: bool,
}

impl<'n> Trainer<'n> {
    pub fn new(network: &'n mut Network, loss: Box<dyn Loss>, optimizer: Box<dyn Optimizer>) -> Self {
        let workspace = Workspace::for_optimizer(network, optimizer.as_ref());
        let needs_da = optimizer.computes_da();
        let needs_dw = optimizer.computes_dw();

        Trainer {
            network,
            loss,
            optimizer,
            workspace,
            needs_da,
            needs_dw,
        }
    }

    pub fn network(&self) -> &Network {
        &*self.network
    }

    /// The epoch workspace, holding the averaged results of the last call to `train`.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Runs one epoch over `xs`/`ys` and updates the weights once. Returns the epoch's average loss,
    /// computed with the weights as they were before the update.
    ///
    /// # Arguments
    /// * `epoch` - Passed through to the optimizer's update.
    /// * `xs` - Training inputs, each of the network's input width.
    /// * `ys` - Targets, one per input, each of the network's output width.
    ///
    /// # Errors
    /// `EmptyBatch`, `SizeMismatch` or `InvalidTarget` if the examples do not fit, checked before
    /// anything is touched. Errors from the loss or the optimizer are passed through.
    pub fn train(&mut self, epoch: usize, xs: &[Vec<f64>], ys: &[Vec<f64>]) -> Result<f64> {
        self.check_batch(xs, ys)?;

        self.workspace.init_before_epoch();

        for (k, (x, y)) in xs.iter().zip(ys).enumerate() {
            // Scratch workspaces never carry a velocity; momentum lives at the epoch level only.
            let mut example = Workspace::new(self.network, self.needs_da, self.needs_dw, false);

            self.network.forward(&mut example, x);
            self.optimizer
                .compute_gradients(self.network, &mut example, self.loss.as_ref(), y)?;
            trace!("epoch {epoch}, example {k}: loss {}", example.loss);

            self.workspace.add(&example);
        }

        self.workspace.average(xs.len());
        self.optimizer
            .update_weights(epoch, self.network, &mut self.workspace)?;

        debug!("epoch {epoch}: loss {}", self.workspace.loss);
        Ok(self.workspace.loss)
    }

    fn check_batch(&self, xs: &[Vec<f64>], ys: &[Vec<f64>]) -> Result<()> {
        if xs.is_empty() {
            return Err(NetError::EmptyBatch);
        }
        if xs.len() != ys.len() {
            return Err(NetError::SizeMismatch {
                what: "training targets",
                got: ys.len(),
                expected: xs.len(),
            });
        }
        if let Some(x) = xs.iter().find(|x| x.len() != self.network.inputs) {
            return Err(NetError::SizeMismatch {
                what: "training example",
                got: x.len(),
                expected: self.network.inputs,
            });
        }
        if let Some(y) = ys.iter().find(|y| y.len() != self.network.outputs) {
            return Err(NetError::SizeMismatch {
                what: "training target",
                got: y.len(),
                expected: self.network.outputs,
            });
        }
        ys.iter().try_for_each(|y| self.loss.check_target(y))
    }
}
