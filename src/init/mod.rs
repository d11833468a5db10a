pub mod fixed;
pub mod glorot;
pub mod initializer;
pub mod spec;

pub use fixed::FixedInitializer;
pub use glorot::GlorotInitializer;
pub use initializer::WeightInitializer;
pub use spec::InitializerSpec;
