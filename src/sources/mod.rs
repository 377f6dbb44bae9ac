mod gaussian;
mod source;

pub use gaussian::GaussianSource;
pub use source::SampleSource;
