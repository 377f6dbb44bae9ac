use crate::statistics::{Estimator, EstimatorKind, StatsError, StatsSnapshot};

/// Single-pass accumulator for running mean, variance, and standard
/// deviation.
///
/// Each observation folds into the state in O(1) time via Welford's online
/// recurrence; the observations themselves are never stored, so memory stays
/// O(1) no matter how long the stream runs. The recurrence tracks the mean
/// and the accumulated sum of squared deviations directly, avoiding the
/// catastrophic cancellation of the naive `Σx² − (Σx)²/n` formulation.
///
/// The accumulator is a plain value with no internal synchronization;
/// concurrent producers must serialize access themselves.
///
/// Observations are taken at face value: pushing a NaN or infinite sample is
/// not guarded against and will propagate into every later estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    sum_sq: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporates one observation.
    ///
    /// The first observation seeds the mean; every later one applies
    /// `mean += (value − mean)/count` followed by
    /// `sum_sq += delta · (value − mean)`, where `delta` is the deviation
    /// from the mean *before* the update.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            self.mean = value;
            self.sum_sq = 0.0;
        } else {
            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            self.sum_sq += delta * (value - self.mean);
        }
    }

    /// Returns to the zero state, ready for a fresh series. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of observations since construction or the last [`reset`].
    ///
    /// [`reset`]: RunningStats::reset
    #[inline]
    pub fn samples_seen(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean of the series, or `0.0` before the first push.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count > 0 { self.mean } else { 0.0 }
    }

    /// Variance of the series under the given estimator.
    ///
    /// Fewer than two observations yield `0.0` regardless of `kind`: there
    /// is no spread to estimate yet.
    pub fn variance(&self, kind: EstimatorKind) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        match kind {
            EstimatorKind::Sample => self.sum_sq / (self.count - 1) as f64,
            EstimatorKind::Population => self.sum_sq / self.count as f64,
        }
    }

    /// Standard deviation of the series under the given estimator.
    ///
    /// `sum_sq` is a sum of squares and the divisor is positive, so the
    /// radicand is never negative.
    pub fn standard_deviation(&self, kind: EstimatorKind) -> f64 {
        self.variance(kind).sqrt()
    }

    /// Variance selected by the textual estimator tag used in settings
    /// files and wire messages (see [`EstimatorKind`]).
    ///
    /// Parsing of `tag` is deferred until at least two observations are
    /// present: below that threshold every tag, recognized or not, yields
    /// `Ok(0.0)`, matching the typed accessors. Callers that want eager
    /// validation should parse an [`EstimatorKind`] themselves.
    pub fn variance_from_tag(&self, tag: &str) -> Result<f64, StatsError> {
        if self.count <= 1 {
            return Ok(0.0);
        }
        let kind = tag
            .parse::<EstimatorKind>()
            .map_err(|_| StatsError::InvalidEstimatorKind(tag.to_string()))?;
        Ok(self.variance(kind))
    }

    /// Standard deviation selected by textual tag; propagates the same
    /// error as [`variance_from_tag`].
    ///
    /// [`variance_from_tag`]: RunningStats::variance_from_tag
    pub fn standard_deviation_from_tag(&self, tag: &str) -> Result<f64, StatsError> {
        Ok(self.variance_from_tag(tag)?.sqrt())
    }

    /// Captures the current state as an immutable summary.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            samples_seen: self.count,
            mean: self.mean(),
            sample_deviation: self.standard_deviation(EstimatorKind::Sample),
            population_deviation: self.standard_deviation(EstimatorKind::Population),
        }
    }
}

impl Estimator for RunningStats {
    #[inline]
    fn add(&mut self, v: f64) {
        self.push(v);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.mean()
    }
}
