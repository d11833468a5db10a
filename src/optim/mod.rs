mod backprop;
pub mod gradient;
pub mod momentum;
pub mod optimizer;
pub mod optimizer_type;

pub use backprop::backprop;
pub use gradient::GradientOptimizer;
pub use momentum::MomentumOptimizer;
pub use optimizer::Optimizer;
pub use optimizer_type::OptimizerType;
