use serde::{Deserialize, Serialize};

use super::Network;
use crate::{
    error::{NetError, Result},
    init::{InitializerSpec, WeightInitializer},
};

/// A serializable description of a network's topology and how to initialize it.
///
/// Fields:
/// - `hidden`      - number of hidden layers (may be zero)
/// - `width`       - units per hidden layer
/// - `inputs`      - size of the input vector
/// - `outputs`     - size of the output vector
/// - `initializer` - weight initialization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    pub hidden: usize,
    pub width: usize,
    pub inputs: usize,
    pub outputs: usize,
    pub initializer: InitializerSpec,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        Self {
            hidden: 1,
            width: 2,
            inputs: 2,
            outputs: 1,
            initializer: InitializerSpec::Fixed,
        }
    }
}

impl NetworkSpec {
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("width", self.width),
            ("inputs", self.inputs),
            ("outputs", self.outputs),
        ] {
            if size == 0 {
                return Err(NetError::InvalidTopology(format!("{name} must be positive")));
            }
        }
        Ok(())
    }

    /// Validates the spec and builds an initialized network from it.
    pub fn build(&self) -> Result<Network> {
        self.validate()?;
        let mut boxed = self.initializer.build();
        let init: &mut dyn WeightInitializer = boxed.as_mut();
        Ok(Network::new(
            self.hidden,
            self.width,
            self.inputs,
            self.outputs,
            Some(init),
        ))
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
