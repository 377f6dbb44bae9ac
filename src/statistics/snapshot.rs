use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Point-in-time summary of a running statistics accumulator, suitable for
/// handing to a dashboard or serializing onto an HTTP response.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub samples_seen: u64,
    pub mean: f64,
    pub sample_deviation: f64,
    pub population_deviation: f64,
}

impl Display for StatsSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, mean={:.6}, sample_dev={:.6}, population_dev={:.6}",
            self.samples_seen, self.mean, self.sample_deviation, self.population_deviation
        )
    }
}
