//! Builds the two-class Iris fixture (`Iris-setosa` → 0, `Iris-virginica` → 1)
//! used to evaluate the PSO classifier.

pub mod data;
pub mod error;
pub mod fixture;

pub use error::{FixtureError, Result};
pub use fixture::{build, FixtureConfig, FixtureSummary};
