use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// The crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum NetError {
    /// A loss function was called with an arity it does not implement.
    UnsupportedLoss {
        loss: &'static str,
        signature: &'static str,
    },
    /// A training example or target does not fit the network, or the example lists disagree.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// Training was requested on an empty batch.
    EmptyBatch,
    /// A workspace lacks a buffer the optimizer needs.
    MissingBuffer(&'static str),
    /// The network topology or its weight shapes are invalid.
    InvalidTopology(String),
    /// A target is not valid for the loss it is paired with.
    InvalidTarget {
        loss: &'static str,
        reason: String,
    },
    UnknownLoss(String),
    UnknownOptimizer(String),
}

impl Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::UnsupportedLoss { loss, signature } => {
                write!(f, "{loss} does not support the {signature} loss signature")
            }
            NetError::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            NetError::EmptyBatch => write!(f, "cannot train on an empty batch"),
            NetError::MissingBuffer(name) => {
                write!(f, "workspace has no `{name}` buffer allocated")
            }
            NetError::InvalidTopology(reason) => write!(f, "invalid network topology: {reason}"),
            NetError::InvalidTarget { loss, reason } => {
                write!(f, "invalid target for {loss}: {reason}")
            }
            NetError::UnknownLoss(name) => write!(f, "unknown loss function: {name}"),
            NetError::UnknownOptimizer(name) => write!(f, "unknown optimizer: {name}"),
        }
    }
}

impl Error for NetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_loss_message_names_the_loss() {
        let err = NetError::UnsupportedLoss {
            loss: "SoftmaxLoss",
            signature: "scalar",
        };
        assert_eq!(
            err.to_string(),
            "SoftmaxLoss does not support the scalar loss signature"
        );
    }

    #[test]
    fn size_mismatch_message() {
        let err = NetError::SizeMismatch {
            what: "training input",
            got: 3,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "size mismatch for training input: got 3, expected 2"
        );
    }
}
