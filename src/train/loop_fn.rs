use log::info;
use std::time::Instant;

use super::{EpochStats, TrainConfig, Trainer};
use crate::{error::Result, network::Network};

/// Trains `network` for `config.epochs` epochs and returns the statistics of every epoch.
///
/// # Arguments
/// - `network` - mutable reference to the network; modified in place
/// - `xs`      - training samples, each of length `network.inputs`
/// - `ys`      - corresponding targets, each of length `network.outputs`
/// - `config`  - epochs, loss, optimizer and progress reporting
///
/// Epochs are numbered from 1. With `config.epochs == 0` nothing is trained and the result is empty.
/// The first failing epoch aborts the run with its error.
pub fn train_loop(
    network: &mut Network,
    xs: &[Vec<f64>],
    ys: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    let mut history = Vec::new();
    if config.epochs == 0 {
        return Ok(history);
    }

    let mut trainer = Trainer::new(network, config.loss.build(), config.optimizer.build());

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let loss = trainer.train(epoch, xs, ys)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if config.progress {
            info!("epoch {epoch}/{}: loss {loss}", config.epochs);
        }

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            loss,
            elapsed_ms,
        });
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::NetError, network::NetworkSpec};

    #[test]
    fn records_one_entry_per_epoch() {
        let mut net = NetworkSpec::default().build().unwrap();
        let config = TrainConfig {
            epochs: 3,
            ..TrainConfig::default()
        };

        let stats = train_loop(&mut net, &[vec![4.0, 3.0]], &[vec![1.0]], &config).unwrap();

        assert_eq!(stats.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(stats.iter().all(|s| s.total_epochs == 3));
        assert!((stats[0].loss - 1.2996).abs() < 1e-9);
    }

    #[test]
    fn zero_epochs_leave_the_network_alone() {
        let mut net = NetworkSpec::default().build().unwrap();
        let before = net.clone();
        let config = TrainConfig {
            epochs: 0,
            ..TrainConfig::default()
        };

        let stats = train_loop(&mut net, &[vec![4.0, 3.0]], &[vec![1.0]], &config).unwrap();

        assert!(stats.is_empty());
        assert_eq!(net, before);
    }

    #[test]
    fn errors_abort_the_run() {
        let mut net = NetworkSpec::default().build().unwrap();

        let err = train_loop(&mut net, &[], &[], &TrainConfig::default()).unwrap_err();

        assert_eq!(err, NetError::EmptyBatch);
    }

    #[test]
    fn huge_epoch_counts_reserve_nothing_up_front() {
        let mut net = NetworkSpec::default().build().unwrap();
        let config = TrainConfig {
            epochs: usize::MAX,
            ..TrainConfig::default()
        };

        let err = train_loop(&mut net, &[], &[], &config).unwrap_err();

        assert_eq!(err, NetError::EmptyBatch);
    }
}
