use serde::{Deserialize, Serialize};

use super::{FixedInitializer, GlorotInitializer, WeightInitializer};

/// Selects how a network's weights are initialized.
///
/// - `Fixed`  - deterministic cycle through `[-0.2, -0.1, 0.0, 0.1, 0.2]`.
/// - `Glorot` - uniform Glorot/Bengio sampling from a generator seeded with `seed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InitializerSpec {
    #[default]
    Fixed,
    Glorot {
        #[serde(default)]
        seed: u64,
    },
}

impl InitializerSpec {
    pub fn build(&self) -> Box<dyn WeightInitializer> {
        match *self {
            InitializerSpec::Fixed => Box::new(FixedInitializer::new()),
            InitializerSpec::Glorot { seed } => Box::new(GlorotInitializer::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json() {
        let spec: InitializerSpec = serde_json::from_str(r#"{"type": "glorot", "seed": 9}"#).unwrap();
        assert_eq!(spec, InitializerSpec::Glorot { seed: 9 });

        let spec: InitializerSpec = serde_json::from_str(r#"{"type": "fixed"}"#).unwrap();
        assert_eq!(spec, InitializerSpec::Fixed);
    }
}
