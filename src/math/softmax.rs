/// Softmax of `v`, shifted by its maximum so large inputs do not overflow `exp`.
///
/// An empty input yields an empty output.
pub fn softmax(v: &[f64]) -> Vec<f64> {
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = v.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}
