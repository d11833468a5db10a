pub mod error;
pub mod init;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;
pub mod workspace;

// Convenience re-exports
pub use error::{NetError, Result};
pub use init::{FixedInitializer, GlorotInitializer, InitializerSpec, WeightInitializer};
pub use loss::{Loss, LossType, MseLoss, SoftmaxLoss};
pub use math::matrix::Matrix;
pub use network::{Network, NetworkSpec};
pub use optim::{GradientOptimizer, MomentumOptimizer, Optimizer, OptimizerType};
pub use train::{train_loop, EpochStats, TrainConfig, Trainer};
pub use workspace::Workspace;
