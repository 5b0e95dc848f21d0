//! Error type for TLE parsing and orbit computations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TleError {
    /// Short, unsplittable or unparseable TLE text
    #[error("malformed TLE input: {0}")]
    MalformedInput(String),

    /// Kepler solver ran out of iterations
    #[error("Kepler solver did not converge after {iterations} iterations (M = {mean_anomaly}, e = {eccentricity})")]
    NonConvergence {
        iterations: usize,
        mean_anomaly: f64,
        eccentricity: f64,
    },

    /// Epoch outside valid calendar/time bounds
    #[error("epoch out of range: {0}")]
    OutOfRange(String),

    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),
}
