use crate::{
    math::{self, Matrix},
    network::Network,
    optim::Optimizer,
};

/// Mutable state of one forward/backward pass, or of a whole epoch once examples are accumulated
/// into it.
///
/// `a` is always allocated. `da`, `dw` and `v` exist only when the optimizer asked for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    /// Activations, one vector per layer.
    pub a: Vec<Vec<f64>>,
    /// Loss gradient with respect to each layer's activations.
    pub da: Option<Vec<Vec<f64>>>,
    /// Loss gradient with respect to each weight matrix.
    pub dw: Option<Vec<Matrix>>,
    /// Momentum velocity. Survives across epochs.
    pub v: Option<Vec<Matrix>>,
    /// Loss of the last example, or the running total of an epoch.
    pub loss: f64,
}

impl Workspace {
    /// Allocates a workspace shaped after `network`.
    ///
    /// # Arguments
    /// * `network` - The network whose layer sizes the buffers follow.
    /// * `needs_da` - Whether to allocate activation gradients.
    /// * `needs_dw` - Whether to allocate weight gradients.
    /// * `needs_v` - Whether to allocate a momentum velocity.
    pub fn new(network: &Network, needs_da: bool, needs_dw: bool, needs_v: bool) -> Self {
        let (h, w, i, o) = (network.hidden, network.width, network.inputs, network.outputs);

        Self {
            a: math::allocate_activations(h, w, i, o),
            da: needs_da.then(|| math::allocate_activations(h, w, i, o)),
            dw: needs_dw.then(|| math::allocate_weights(h, w, i, o)),
            v: needs_v.then(|| math::allocate_weights(h, w, i, o)),
            loss: 0.0,
        }
    }

    /// Allocates exactly the buffers `optimizer` declares it uses.
    pub fn for_optimizer(network: &Network, optimizer: &dyn Optimizer) -> Self {
        Self::new(
            network,
            optimizer.computes_da(),
            optimizer.computes_dw(),
            optimizer.computes_v(),
        )
    }

    /// Clears the gradients and the loss before a new epoch.
    ///
    /// Activations are left alone since the next forward pass overwrites them, and the velocity is
    /// kept so momentum carries over between epochs.
    pub fn init_before_epoch(&mut self) {
        if let Some(da) = &mut self.da {
            math::zero(da);
        }
        if let Some(dw) = &mut self.dw {
            math::zero(dw);
        }
        self.loss = 0.0;
    }

    /// Accumulates one example's workspace into this one. The velocity is not accumulated.
    ///
    /// Panics if a gradient buffer present here is missing from `example`, or if shapes differ.
    pub fn add(&mut self, example: &Workspace) {
        math::add(&mut self.a, &example.a);

        if let Some(da) = &mut self.da {
            let Some(other) = &example.da else {
                panic!("example workspace has no `da` buffer")
            };
            math::add(da, other);
        }
        if let Some(dw) = &mut self.dw {
            let Some(other) = &example.dw else {
                panic!("example workspace has no `dw` buffer")
            };
            math::add(dw, other);
        }

        self.loss += example.loss;
    }

    /// Divides activations, gradients and loss by the batch size `n`. The velocity is not averaged.
    pub fn average(&mut self, n: usize) {
        assert!(n > 0, "cannot average over an empty batch");
        let n = n as f64;

        math::normalize(&mut self.a, n);
        if let Some(da) = &mut self.da {
            math::normalize(da, n);
        }
        if let Some(dw) = &mut self.dw {
            math::normalize(dw, n);
        }
        self.loss /= n;
    }
}
