//! Trains a toy linear network from an optional JSON experiment file and prints the result.
//!
//!   toynet [experiment.json]
//!
//! Every field of the experiment is optional; with no file the default network learns
//! `[4, 3] -> [1]`. Set `RUST_LOG=debug` (or `trace`) for per-epoch (per-example) logging.

use serde::Deserialize;
use std::{error::Error, process};

use toynet::{train_loop, NetError, NetworkSpec, TrainConfig};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Experiment {
    network: NetworkSpec,
    train: TrainConfig,
    training_x: Vec<Vec<f64>>,
    training_y: Vec<Vec<f64>>,
    testing: Vec<Vec<f64>>,
}

impl Default for Experiment {
    fn default() -> Self {
        Experiment {
            network: NetworkSpec::default(),
            train: TrainConfig::default(),
            training_x: vec![vec![4.0, 3.0]],
            training_y: vec![vec![1.0]],
            testing: Vec::new(),
        }
    }
}

fn load_experiment(path: Option<&str>) -> Result<Experiment, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(Experiment::default());
    };

    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn run(path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let experiment = load_experiment(path)?;
    let mut network = experiment.network.build()?;

    if let Some(x) = experiment.testing.iter().find(|x| x.len() != network.inputs) {
        return Err(NetError::SizeMismatch {
            what: "testing example",
            got: x.len(),
            expected: network.inputs,
        }
        .into());
    }

    let stats = train_loop(
        &mut network,
        &experiment.training_x,
        &experiment.training_y,
        &experiment.train,
    )?;

    if experiment.train.progress {
        for s in &stats {
            println!("{} {}", s.epoch, s.loss);
        }
    }

    if let Some(last) = stats.last() {
        println!("final loss: {}", last.loss);
    }
    for (i, w) in network.weights.iter().enumerate() {
        println!("W[{i}] = {:?}", w.data);
    }

    for x in &experiment.testing {
        println!("{x:?} -> {:?}", network.predict(x));
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1);
    if let Err(e) = run(path.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
