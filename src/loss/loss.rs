use crate::error::{NetError, Result};

/// A loss function: compares a target `y` with a prediction `y_hat`, returning the loss value and its
/// gradient with respect to `y_hat`.
///
/// Implementors provide at least one of the two signatures. The vector form defaults to applying the
/// scalar form element by element and averaging the loss over the vector's length (the gradient is
/// not averaged). A signature a loss does not provide fails with [`NetError::UnsupportedLoss`].
pub trait Loss {
    /// The name of the loss function, used in error messages.
    fn name(&self) -> &'static str;

    /// Loss and gradient for a single output.
    fn scalar(&self, _y: f64, _y_hat: f64) -> Result<(f64, f64)> {
        Err(self.unsupported("scalar"))
    }

    /// Loss and gradient for a vector of outputs.
    ///
    /// Pre-conditions: `y.len() == y_hat.len()` and `y.len() >= 1`.
    fn vector(&self, y: &[f64], y_hat: &[f64]) -> Result<(f64, Vec<f64>)> {
        assert_eq!(y.len(), y_hat.len(), "{}: target and prediction differ in length", self.name());
        assert!(!y.is_empty(), "{}: empty target", self.name());

        let mut total = 0.0;
        let mut grad = Vec::with_capacity(y.len());

        for (&t, &p) in y.iter().zip(y_hat) {
            let (l, g) = self.scalar(t, p).map_err(|_| self.unsupported("vector"))?;
            total += l;
            grad.push(g);
        }

        Ok((total / y.len() as f64, grad))
    }

    /// Checks that `y` is a target this loss can score. Any real vector is accepted by default.
    fn check_target(&self, _y: &[f64]) -> Result<()> {
        Ok(())
    }

    fn unsupported(&self, signature: &'static str) -> NetError {
        NetError::UnsupportedLoss {
            loss: self.name(),
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A loss that provides neither signature.
    struct Nameless;

    impl Loss for Nameless {
        fn name(&self) -> &'static str {
            "Nameless"
        }
    }

    #[test]
    fn missing_signatures_report_the_attempted_call() {
        assert_eq!(
            Nameless.scalar(1.0, 0.0).unwrap_err(),
            NetError::UnsupportedLoss {
                loss: "Nameless",
                signature: "scalar",
            }
        );
        assert_eq!(
            Nameless.vector(&[1.0], &[0.0]).unwrap_err(),
            NetError::UnsupportedLoss {
                loss: "Nameless",
                signature: "vector",
            }
        );
    }

    #[test]
    fn any_target_is_accepted_by_default() {
        assert_eq!(Nameless.check_target(&[0.3, -7.0]), Ok(()));
    }
}
