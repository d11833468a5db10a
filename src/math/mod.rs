pub mod matrix;
pub mod softmax;
pub mod tensor;

pub use matrix::Matrix;
pub use softmax::softmax;
pub use tensor::{
    add, allocate_activations, allocate_weights, layer_sizes, normalize, zero, Elementwise,
};
