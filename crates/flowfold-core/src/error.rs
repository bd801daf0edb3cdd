use flowfold_noise::NoiseError;
use thiserror::Error;

/// Invalid-argument errors raised by the samplers and transforms.
///
/// Every variant is fatal to the call that produced it: nothing is retried
/// and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifoldError {
    #[error("num_nodes must be > 0, got {0}")]
    InvalidNodeCount(usize),

    #[error("num_nodes ({num_nodes}) does not match point count ({points})")]
    NodeCountMismatch { num_nodes: usize, points: usize },

    #[error("expected {expected} tilt angles for {dim}-dimensional data, got {got}")]
    TiltAngleMismatch {
        dim: usize,
        expected: usize,
        got: usize,
    },

    #[error("cannot rotate zero-dimensional data")]
    EmptyDimension,

    #[error("sigma must be finite and >= 0, got {0}")]
    InvalidSigma(f64),

    #[error("height must be finite and >= 0, got {0}")]
    InvalidHeight(f64),

    #[error("num_spirals must be finite and > 0, got {0}")]
    InvalidSpirals(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("length mismatch: {points} points, {flows} flows, {labels} labels")]
    LengthMismatch {
        points: usize,
        flows: usize,
        labels: usize,
    },

    #[error("noise model: {0}")]
    Noise(#[from] NoiseError),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Invalid sampler parameters: {0}")]
    Manifold(#[from] ManifoldError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifold_error_from_noise_error() {
        let err: ManifoldError = NoiseError::InvalidExtent(-2.0).into();
        assert_eq!(err, ManifoldError::Noise(NoiseError::InvalidExtent(-2.0)));
        assert_eq!(
            err.to_string(),
            "noise model: extent must be finite and >= 0, got -2"
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_from_manifold_error() {
        let config_err: ConfigError = ManifoldError::InvalidSigma(-1.0).into();
        assert!(matches!(config_err, ConfigError::Manifold(_)));
        assert!(config_err.to_string().contains("sigma"));
    }

    #[test]
    fn manifold_error_display_messages() {
        assert_eq!(
            ManifoldError::InvalidNodeCount(0).to_string(),
            "num_nodes must be > 0, got 0"
        );
        assert_eq!(
            ManifoldError::NodeCountMismatch {
                num_nodes: 4,
                points: 3
            }
            .to_string(),
            "num_nodes (4) does not match point count (3)"
        );
        assert_eq!(
            ManifoldError::TiltAngleMismatch {
                dim: 3,
                expected: 2,
                got: 1
            }
            .to_string(),
            "expected 2 tilt angles for 3-dimensional data, got 1"
        );
        assert_eq!(
            ManifoldError::InvalidHeight(-20.0).to_string(),
            "height must be finite and >= 0, got -20"
        );
        assert_eq!(
            ManifoldError::NonFinite {
                name: "radius",
                value: f64::INFINITY
            }
            .to_string(),
            "radius must be finite, got inf"
        );
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::InvalidValue {
                field: "shape".into(),
                message: "unknown shape torus".into()
            }
            .to_string(),
            "Invalid value for shape: unknown shape torus"
        );
    }
}
