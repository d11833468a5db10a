use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{NetError, Result},
    init::WeightInitializer,
    math::{self, Matrix},
    workspace::Workspace,
};

/// A purely linear feed-forward network: `inputs`, then `hidden` layers of `width` units, then
/// `outputs`. Weight matrix `i` maps layer `i` onto layer `i + 1`; there are no biases and no
/// activation functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub hidden: usize,
    pub width: usize,
    pub inputs: usize,
    pub outputs: usize,
    pub weights: Vec<Matrix>,
}

impl Network {
    /// Builds a network, running `initializer` over its weights if one is given. Without an
    /// initializer every weight stays zero.
    pub fn new(
        hidden: usize,
        width: usize,
        inputs: usize,
        outputs: usize,
        initializer: Option<&mut dyn WeightInitializer>,
    ) -> Network {
        assert!(
            width > 0 && inputs > 0 && outputs > 0,
            "layer sizes must be positive: width {width}, inputs {inputs}, outputs {outputs}"
        );

        let mut weights = math::allocate_weights(hidden, width, inputs, outputs);
        if let Some(init) = initializer {
            init.initialize(&mut weights);
        }
        debug!("network with {} weight matrices built", weights.len());

        Network {
            hidden,
            width,
            inputs,
            outputs,
            weights,
        }
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        math::layer_sizes(self.hidden, self.width, self.inputs, self.outputs)
    }

    /// Forward pass; writes every layer's activations into `workspace.a`.
    ///
    /// Only the workspace is touched, so repeated calls with different inputs are independent.
    pub fn forward(&self, workspace: &mut Workspace, x: &[f64]) {
        if x.len() != self.inputs {
            panic!(
                "Input is of incorrect size: got {}, expected {}",
                x.len(),
                self.inputs
            )
        }

        if workspace.a.len() != self.hidden + 2 {
            panic!(
                "Workspace has {} activation layers, network has {}",
                workspace.a.len(),
                self.hidden + 2
            )
        }

        let a = &mut workspace.a;
        a[0].clear();
        a[0].extend_from_slice(x);

        for (i, w) in self.weights.iter().enumerate() {
            a[i + 1] = w.mul_vec(&a[i]);
        }
    }

    /// Runs a forward pass in a throwaway workspace and returns the output layer.
    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        let mut workspace = Workspace::new(self, false, false, false);
        self.forward(&mut workspace, x);
        workspace.a.pop().unwrap_or_default()
    }

    /// Checks that the weights chain from `inputs` to `outputs` through `hidden` layers of `width`.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.inputs == 0 || self.outputs == 0 {
            return Err(NetError::InvalidTopology(format!(
                "layer sizes must be positive (width {}, inputs {}, outputs {})",
                self.width, self.inputs, self.outputs
            )));
        }

        if self.weights.len() != self.hidden + 1 {
            return Err(NetError::InvalidTopology(format!(
                "expected {} weight matrices, found {}",
                self.hidden + 1,
                self.weights.len()
            )));
        }

        for (i, (w, pair)) in self.weights.iter().zip(self.layer_sizes().windows(2)).enumerate() {
            let expected = (pair[1], pair[0]);
            if w.shape() != expected || w.data.len() != w.rows || w.data.iter().any(|r| r.len() != w.cols) {
                return Err(NetError::InvalidTopology(format!(
                    "weight matrix {i} should be {}x{}, found {}x{}",
                    expected.0, expected.1, w.rows, w.cols
                )));
            }
        }

        Ok(())
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`, rejecting weights
    /// whose shapes do not match the recorded topology.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        network
            .validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(network)
    }
}
