use thiserror::Error;

/// Rejected noise parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoiseError {
    #[error("sigma must be finite and >= 0, got {0}")]
    InvalidSigma(f64),

    #[error("extent must be finite and >= 0, got {0}")]
    InvalidExtent(f64),

    #[error("axis {0} out of range for 3-d points")]
    InvalidAxis(usize),
}
