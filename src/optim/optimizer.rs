use crate::{error::Result, loss::Loss, network::Network, workspace::Workspace};

/// A weight update strategy.
///
/// The capability flags tell [`Workspace::for_optimizer`] which buffers to allocate; they are read
/// once when a workspace is built. An optimizer that computes nothing needs nothing, hence the
/// `false` defaults.
pub trait Optimizer {
    fn computes_da(&self) -> bool {
        false
    }

    fn computes_dw(&self) -> bool {
        false
    }

    fn computes_v(&self) -> bool {
        false
    }

    /// Fills `workspace` with the loss and its gradients for target `y`, assuming the network has
    /// just been forwarded into it.
    ///
    /// # Arguments
    /// * `network` - The network that produced `workspace.a`.
    /// * `workspace` - Holds the forward activations; receives the loss and gradients.
    /// * `loss` - The loss function to differentiate.
    /// * `y` - The target for the forwarded example.
    fn compute_gradients(
        &self,
        _network: &Network,
        _workspace: &mut Workspace,
        _loss: &dyn Loss,
        _y: &[f64],
    ) -> Result<()> {
        Ok(())
    }

    /// Applies one update to the network's weights from an averaged epoch workspace.
    ///
    /// # Arguments
    /// * `epoch` - The caller's epoch counter, for schedules that depend on it.
    /// * `network` - The network to update.
    /// * `workspace` - The averaged gradients, plus whatever state the optimizer keeps there.
    fn update_weights(
        &self,
        epoch: usize,
        network: &mut Network,
        workspace: &mut Workspace,
    ) -> Result<()>;
}
