use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Closed set of deviation estimators.
///
/// The textual tags (`"sample"`, `"population"`) are the form the selector
/// takes in settings files and wire messages; [`std::str::FromStr`] (via
/// `EnumString`) is the single place an unrecognized tag can surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EstimatorKind {
    /// Divides the accumulated squared deviations by `n - 1` (Bessel's
    /// correction): unbiased when the data is a sample of a larger
    /// population.
    Sample,

    /// Divides by `n`: the maximum-likelihood estimator when the full
    /// population has been observed.
    Population,
}
