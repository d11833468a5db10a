use toynet::{
    train_loop, FixedInitializer, GradientOptimizer, InitializerSpec, Loss, LossType, MomentumOptimizer,
    MseLoss, NetError, Network, NetworkSpec, OptimizerType, SoftmaxLoss, TrainConfig, Trainer,
};

fn assert_close(expected: f64, got: f64, tol: f64) {
    assert!(
        (expected - got).abs() <= tol,
        "expected {expected}, got {got} (tolerance {tol})"
    );
}

fn toy() -> Network {
    Network::new(1, 2, 2, 1, Some(&mut FixedInitializer::new()))
}

fn gradient(net: &mut Network, lr: f64) -> Trainer<'_> {
    Trainer::new(net, Box::new(MseLoss::new()), Box::new(GradientOptimizer::new(lr)))
}

fn single() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    (vec![vec![4.0, 3.0]], vec![vec![1.0]])
}

#[test]
fn large_learning_rate_diverges() {
    let (xs, ys) = single();
    let mut net = toy();
    let mut trainer = gradient(&mut net, 0.5);

    let losses: Vec<f64> = (1..=3).map(|e| trainer.train(e, &xs, &ys).unwrap()).collect();

    assert_close(1.2996, losses[0], 1e-9);
    assert_close(7.11608976, losses[1], 1e-6);
    assert_close(11060.051509223818, losses[2], 1e-4);
}

#[test]
fn loss_decreases_monotonically_after_a_warm_up_epoch() {
    let (xs, ys) = single();
    let mut net = toy();

    assert_close(1.2996, gradient(&mut net, 0.1).train(1, &xs, &ys).unwrap(), 1e-9);

    let mut trainer = gradient(&mut net, 0.01);
    let losses: Vec<f64> = (2..=51).map(|e| trainer.train(e, &xs, &ys).unwrap()).collect();

    assert_close(0.5151564495, losses[0], 1e-8);
    for pair in losses.windows(2) {
        assert!(pair[1] <= pair[0], "loss went up: {pair:?}");
    }
    assert!(losses[36] < 1e-6);
    assert!(losses[49] < 1e-8);
}

#[test]
fn gradient_descent_converges_on_one_example() {
    let (xs, ys) = single();
    let mut net = toy();
    let mut trainer = gradient(&mut net, 0.01);

    let mut previous = f64::INFINITY;
    for epoch in 1..=100 {
        let loss = trainer.train(epoch, &xs, &ys).unwrap();
        assert!(loss <= previous);
        previous = loss;
    }

    assert!(previous < 1e-12);
    assert_close(1.0, trainer.network().predict(&[4.0, 3.0])[0], 1e-6);
}

#[test]
fn converges_on_another_single_example() {
    let mut net = toy();
    let mut trainer = gradient(&mut net, 0.01);

    let mut loss = f64::INFINITY;
    for epoch in 1..=100 {
        loss = trainer.train(epoch, &[vec![3.0, 4.0]], &[vec![-1.0]]).unwrap();
    }

    assert!(loss < 1e-12);
}

#[test]
fn learns_a_linear_function_from_several_examples() {
    let xs = vec![
        vec![4.0, 3.0],
        vec![3.0, 4.0],
        vec![-1.0, 5.0],
        vec![9.8, -3.1],
    ];
    let ys: Vec<Vec<f64>> = xs.iter().map(|x| vec![x[0] - x[1]]).collect();
    let mut net = toy();
    let mut trainer = gradient(&mut net, 0.01);

    let first = trainer.train(1, &xs, &ys).unwrap();
    let mut last = first;
    for epoch in 2..=60 {
        last = trainer.train(epoch, &xs, &ys).unwrap();
    }

    assert_close(51.742689, first, 1e-5);
    assert!(last < 1e-12);
    assert_close(-7.0, trainer.network().predict(&[2.0, 9.0])[0], 1e-5);
}

#[test]
fn momentum_starts_like_gradient_descent_then_accelerates() {
    let (xs, ys) = single();
    let mut net = toy();
    let mut trainer = Trainer::new(
        &mut net,
        Box::new(MseLoss::new()),
        Box::new(MomentumOptimizer::new(0.01, 0.5)),
    );

    let losses: Vec<f64> = (1..=100).map(|e| trainer.train(e, &xs, &ys).unwrap()).collect();

    assert_close(1.2996, losses[0], 1e-9);
    assert_close(1.1694247488, losses[1], 1e-8);
    assert_close(1.0092488067, losses[2], 1e-8);
    assert!(losses[99] < 1e-20);
}

#[test]
fn softmax_loss_trains_a_classifier() {
    let mut net = Network::new(1, 2, 2, 2, Some(&mut FixedInitializer::new()));
    let mut trainer = Trainer::new(
        &mut net,
        Box::new(SoftmaxLoss::new()),
        Box::new(GradientOptimizer::new(0.01)),
    );

    let losses: Vec<f64> = (1..=20)
        .map(|e| trainer.train(e, &[vec![4.0, 3.0]], &[vec![1.0, 0.0]]).unwrap())
        .collect();

    assert_close(0.8601118864387145, losses[0], 1e-9);
    assert_close(0.653242195627785, losses[19], 1e-9);
    assert!(losses.windows(2).all(|p| p[1] < p[0]));
}

#[test]
fn glorot_initialized_network_improves() {
    let spec = NetworkSpec {
        initializer: InitializerSpec::Glorot { seed: 7 },
        ..NetworkSpec::default()
    };
    let (xs, ys) = single();
    let mut net = spec.build().unwrap();
    let mut trainer = gradient(&mut net, 0.001);

    let first = trainer.train(1, &xs, &ys).unwrap();
    let second = trainer.train(2, &xs, &ys).unwrap();

    assert!(second < first);
}

#[test]
fn train_loop_reports_every_epoch() {
    let (xs, ys) = single();
    let mut net = NetworkSpec::default().build().unwrap();
    let config = TrainConfig::new(
        3,
        LossType::Mse,
        OptimizerType::Momentum {
            learning_rate: 0.01,
            alpha: 0.5,
        },
    );

    let stats = train_loop(&mut net, &xs, &ys, &config).unwrap();

    assert_eq!(stats.len(), 3);
    assert_close(1.1694247488, stats[1].loss, 1e-8);
    assert_eq!(stats[2].epoch, 3);
}

#[test]
fn mismatched_examples_are_errors() {
    let mut net = toy();
    let mut trainer = gradient(&mut net, 0.01);

    assert_eq!(trainer.train(1, &[], &[]), Err(NetError::EmptyBatch));
    assert!(matches!(
        trainer.train(1, &[vec![4.0, 3.0], vec![3.0, 4.0]], &[vec![1.0]]),
        Err(NetError::SizeMismatch { .. })
    ));
}

#[test]
fn vector_only_loss_rejects_scalar_use() {
    let mut net = toy();
    let mut trainer = Trainer::new(
        &mut net,
        Box::new(SoftmaxLoss::new()),
        Box::new(GradientOptimizer::new(0.01)),
    );

    // A single-output network is still trained through the vector signature.
    let loss = trainer.train(1, &[vec![4.0, 3.0]], &[vec![1.0]]).unwrap();
    assert_close(0.0, loss, 1e-12);

    let err = SoftmaxLoss::new().scalar(1.0, 0.0).unwrap_err();
    assert!(err.to_string().contains("SoftmaxLoss"));
}

#[test]
fn train_loop_reports_a_soft_target_as_an_error() {
    let mut net = NetworkSpec {
        outputs: 2,
        ..NetworkSpec::default()
    }
    .build()
    .unwrap();
    let config = TrainConfig::new(5, LossType::Softmax, OptimizerType::default());

    let err = train_loop(&mut net, &[vec![4.0, 3.0]], &[vec![0.5, 0.5]], &config).unwrap_err();

    assert!(matches!(err, NetError::InvalidTarget { .. }));
    assert!(err.to_string().contains("SoftmaxLoss"));
}
