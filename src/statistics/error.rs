use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid estimator kind: {0}")]
    InvalidEstimatorKind(String),
}
