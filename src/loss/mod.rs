pub mod loss;
pub mod loss_type;
pub mod mse;
pub mod softmax;

pub use loss::Loss;
pub use loss_type::LossType;
pub use mse::MseLoss;
pub use softmax::SoftmaxLoss;
