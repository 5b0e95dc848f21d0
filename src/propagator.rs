//! Fixed step two-body propagation for plotting one revolution.
//!
//! Explicit Euler: the acceleration is evaluated at the current position, the
//! position advances with the current velocity, then the velocity advances with
//! that acceleration. Energy drifts slowly; not meant for precise prediction.
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    constants::{KM, MU_EARTH},
    error::{Result, TleError},
    helpers::norm,
    types::StateVector,
};

pub const DEFAULT_STEPS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagatorConfig {
    ///Steps per propagated period
    pub steps: usize,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        PropagatorConfig {
            steps: DEFAULT_STEPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    ///Seconds since the TLE epoch
    pub time: f64,
    pub state: StateVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>, //First point is the epoch state
    pub step: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }
    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }
    ///Positions in km, for plotting around the Earth sphere
    pub fn get_point_array(&self) -> Vec<[f64; 3]> {
        self.points
            .iter()
            .map(|point| point.state.position.map(|x| x / KM))
            .collect()
    }
    ///Largest relative change of specific energy against the first sample
    pub fn max_energy_drift(&self) -> f64 {
        let Some(first) = self.first() else {
            return 0.;
        };
        let initial = first.state.specific_energy();
        self.points
            .iter()
            .map(|point| ((point.state.specific_energy() - initial) / initial).abs())
            .fold(0., f64::max)
    }
}

fn acceleration(position: &[f64; 3], mu: f64) -> [f64; 3] {
    let r = norm(position);
    let factor = -mu / r.powf(3.);
    position.map(|x| factor * x)
}

///One period (s) with the default step count
pub fn propagate(initial: &StateVector, period: f64) -> Result<Trajectory> {
    propagate_with(initial, period, &PropagatorConfig::default())
}

pub fn propagate_with(
    initial: &StateVector,
    period: f64,
    config: &PropagatorConfig,
) -> Result<Trajectory> {
    if !period.is_finite() || period <= 0. {
        return Err(TleError::InvalidElements(format!(
            "cannot propagate over {period} s"
        )));
    }
    if config.steps == 0 {
        return Err(TleError::InvalidElements(
            "propagation needs at least one step".to_string(),
        ));
    }
    let radius = initial.get_radius();
    if !radius.is_finite() || radius == 0. || !initial.get_speed().is_finite() {
        return Err(TleError::InvalidElements(format!(
            "degenerate initial state, |r| = {radius} m"
        )));
    }

    let mu = MU_EARTH * KM.powf(3.);
    let dt = period / config.steps as f64;
    debug!(steps = config.steps, dt, "propagating one period");
    let mut points = Vec::with_capacity(config.steps + 1);
    let mut position = initial.position;
    let mut velocity = initial.velocity;
    points.push(TrajectoryPoint {
        time: 0.,
        state: *initial,
    });
    for step in 1..=config.steps {
        let a = acceleration(&position, mu);
        for axis in 0..3 {
            position[axis] += dt * velocity[axis];
            velocity[axis] += dt * a[axis];
        }
        points.push(TrajectoryPoint {
            time: step as f64 * dt,
            state: StateVector { position, velocity },
        });
    }
    let trajectory = Trajectory { points, step: dt };
    trace!(drift = trajectory.max_energy_drift(), "energy drift");
    Ok(trajectory)
}
