use crate::math::Matrix;

/// Writes the initial values of a network's weight matrices, in place.
pub trait WeightInitializer {
    /// Overwrites every entry of every matrix in `weights`.
    ///
    /// # Arguments
    /// * `weights` - The weight matrices of a network, ordered from the input layer outwards.
    fn initialize(&mut self, weights: &mut [Matrix]);
}
