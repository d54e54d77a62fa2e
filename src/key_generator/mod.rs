//! Reproducible key streams, for the "insert random keys" action of the
//! visualizer as well as for tests and benchmarks

mod random;
mod sequential;

pub use random::*;
pub use sequential::*;
