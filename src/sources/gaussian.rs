use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sources::source::SampleSource;

/// Seeded generator of normally distributed samples.
///
/// Stands in for live telemetry in tests and demos: samples follow
/// `N(mean, deviation²)` via the Box-Muller transform, reproducibly for a
/// given seed. An optional `max_samples` bound turns it into a finite
/// source.
#[derive(Debug)]
pub struct GaussianSource {
    seed: u64,
    rng: StdRng,
    mean: f64,
    deviation: f64,
    max_samples: Option<usize>,
    produced: usize,
    spare: Option<f64>,
}

impl GaussianSource {
    pub fn new(
        mean: f64,
        deviation: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !mean.is_finite() {
            return Err(Error::new(ErrorKind::InvalidInput, "Mean must be finite"));
        }
        if !deviation.is_finite() || deviation < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Deviation must be finite and non-negative",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            mean,
            deviation,
            max_samples,
            produced: 0,
            spare: None,
        })
    }

    /// Box-Muller transform: two uniforms in (0, 1] become two independent
    /// standard normal deviates.
    #[inline]
    fn next_standard_pair(&mut self) -> (f64, f64) {
        let u1: f64 = 1.0 - self.rng.random::<f64>();
        let u2: f64 = self.rng.random::<f64>();
        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = std::f64::consts::TAU * u2;
        (radius * angle.cos(), radius * angle.sin())
    }
}

impl SampleSource for GaussianSource {
    fn has_more_samples(&self) -> bool {
        self.max_samples.map_or(true, |max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }

        let z = match self.spare.take() {
            Some(z) => z,
            None => {
                let (z0, z1) = self.next_standard_pair();
                self.spare = Some(z1);
                z0
            }
        };

        self.produced += 1;
        Some(self.mean + self.deviation * z)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        self.spare = None;
        Ok(())
    }
}
