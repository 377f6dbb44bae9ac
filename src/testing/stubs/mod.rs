pub mod vec_source;

pub use vec_source::VecSource;
