//! Orbit summary of a satellite from its Two-Line Element set.
//!
//! A TLE is read by token position into [`OrbitalElements`], from which the
//! period, semi-major axis, orbit class and the inertial state vector at epoch
//! are derived. [`propagate`] integrates that state over one period under
//! two-body gravity for plotting.
pub use epoch::{epoch_datetime, format_epoch};
pub use error::{Result, TleError};
pub use propagator::{propagate, propagate_with, PropagatorConfig, Trajectory, TrajectoryPoint};
pub use report::Report;
pub use satellite::{OrbitalElements, Satellite};
pub use tle::TleRecord;
pub use types::{DerivedQuantities, OrbitClass, StateVector};
pub mod constants;
mod epoch;
mod error;
mod helpers;
pub mod kepler;
mod propagator;
mod report;
mod satellite;
pub mod state;
mod tle;
mod types;

///Name line and the two data lines of a TLE
pub fn parse_tle(lines: [&str; 3]) -> Result<(String, OrbitalElements)> {
    Ok(Satellite::new_from_lines(lines)?.into_parts())
}

pub fn derive_all(elements: &OrbitalElements) -> Result<DerivedQuantities> {
    elements.derive_all()
}
