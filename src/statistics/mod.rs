mod error;
mod estimator;
mod estimator_kind;
mod running_stats;
mod snapshot;

pub use error::StatsError;
pub use estimator::Estimator;
pub use estimator_kind::EstimatorKind;
pub use running_stats::RunningStats;
pub use snapshot::StatsSnapshot;
