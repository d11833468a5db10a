//! Layer-indexed tensors: one vector per layer of units, one matrix per pair of adjacent layers.

use super::matrix::Matrix;

/// Elementwise arithmetic shared by the vectors and matrices a network is made of.
pub trait Elementwise {
    /// `self += other`. Panics if the shapes differ.
    fn add_from(&mut self, other: &Self);

    /// `self /= n` for every element.
    fn div_scalar(&mut self, n: f64);

    /// Sets every element to zero, keeping the shape.
    fn zero(&mut self);
}

impl Elementwise for Vec<f64> {
    fn add_from(&mut self, other: &Self) {
        if self.len() != other.len() {
            panic!(
                "Vectors are of incorrect sizes: {} and {}",
                self.len(),
                other.len()
            )
        }

        for (x, y) in self.iter_mut().zip(other) {
            *x += y;
        }
    }

    fn div_scalar(&mut self, n: f64) {
        self.iter_mut().for_each(|x| *x /= n);
    }

    fn zero(&mut self) {
        self.iter_mut().for_each(|x| *x = 0.0);
    }
}

impl Elementwise for Matrix {
    fn add_from(&mut self, other: &Self) {
        *self += other;
    }

    fn div_scalar(&mut self, n: f64) {
        *self /= n;
    }

    fn zero(&mut self) {
        self.fill(0.0);
    }
}

/// Number of units in each layer: `inputs, width × hidden, outputs`.
pub fn layer_sizes(hidden: usize, width: usize, inputs: usize, outputs: usize) -> Vec<usize> {
    let mut sizes = Vec::with_capacity(hidden + 2);
    sizes.push(inputs);
    sizes.extend(std::iter::repeat(width).take(hidden));
    sizes.push(outputs);
    sizes
}

/// `hidden + 2` zero vectors, one per layer.
pub fn allocate_activations(
    hidden: usize,
    width: usize,
    inputs: usize,
    outputs: usize,
) -> Vec<Vec<f64>> {
    layer_sizes(hidden, width, inputs, outputs)
        .into_iter()
        .map(|size| vec![0.0; size])
        .collect()
}

/// `hidden + 1` zero matrices; matrix `i` maps layer `i` onto layer `i + 1`.
pub fn allocate_weights(hidden: usize, width: usize, inputs: usize, outputs: usize) -> Vec<Matrix> {
    layer_sizes(hidden, width, inputs, outputs)
        .windows(2)
        .map(|pair| Matrix::zeros(pair[1], pair[0]))
        .collect()
}

/// Elementwise `to[i] += other[i]` for every layer.
pub fn add<T: Elementwise>(to: &mut [T], other: &[T]) {
    if to.len() != other.len() {
        panic!(
            "Tensors have a different number of layers: {} and {}",
            to.len(),
            other.len()
        )
    }

    for (t, o) in to.iter_mut().zip(other) {
        t.add_from(o);
    }
}

/// Divides every element of every layer by `n`.
pub fn normalize<T: Elementwise>(to: &mut [T], n: f64) {
    assert!(n != 0.0, "cannot normalize by zero");
    to.iter_mut().for_each(|t| t.div_scalar(n));
}

pub fn zero<T: Elementwise>(to: &mut [T]) {
    to.iter_mut().for_each(|t| t.zero());
}
