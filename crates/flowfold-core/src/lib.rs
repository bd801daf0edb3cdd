// flowfold-core: Point/flow/label types, errors and seeds for directed manifold sampling.

pub mod error;
pub mod seed;
pub mod types;

pub use error::{ConfigError, ManifoldError};
pub use types::{FlowSet, LabelSet, ManifoldSample, PointSet, SampleSummary};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::error::{ConfigError, ManifoldError};
    pub use crate::seed::SeedHierarchy;
    pub use crate::types::{FlowSet, LabelSet, ManifoldSample, PointSet, SampleSummary};
}
