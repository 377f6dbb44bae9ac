use std::io::Error;

/// Pull-based interface for streams of scalar samples.
///
/// Implementations may represent finite recordings (e.g., a replayed
/// capture) or unbounded generators (e.g., simulated telemetry). Samples
/// are consumed one at a time, in the order they should be accumulated.
pub trait SampleSource {
    /// Indicates whether the source *may* produce more samples.
    ///
    /// Finite sources should return `false` once exhausted; unbounded
    /// generators typically return `true` always. This call should be cheap
    /// and side effect free. If it returns `false`, a subsequent call to
    /// [`next_sample`] must return `None`.
    ///
    /// [`next_sample`]: SampleSource::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the source is exhausted.
    fn next_sample(&mut self) -> Option<f64>;

    /// Resets the source to its initial state.
    ///
    /// Generators re-seed their RNG and clear internal counters; replayed
    /// recordings rewind. Returns an error if the underlying source cannot
    /// be reopened.
    fn restart(&mut self) -> Result<(), Error>;
}
