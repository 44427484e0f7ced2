// Library target backs the binary, the criterion benchmarks and the
// integration tests under tests/.

pub mod config;
pub mod error;
pub mod generator;
pub mod report;

pub use error::{PassdictError, Result};
