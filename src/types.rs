use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{constants::MU_EARTH, constants::KM, helpers::norm};

///Earth centered inertial state. Position in meters, velocity in meters per second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl StateVector {
    pub fn get_radius(&self) -> f64 {
        norm(&self.position)
    }
    pub fn get_speed(&self) -> f64 {
        norm(&self.velocity)
    }
    ///Specific orbital energy in J/kg
    pub fn specific_energy(&self) -> f64 {
        let mu = MU_EARTH * KM.powf(3.);
        self.get_speed().powf(2.) / 2. - mu / self.get_radius()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitClass {
    Leo,
    Meo,
    Geo,
    Heo,
}

impl OrbitClass {
    ///Altitude in km
    pub fn from_altitude(altitude: f64) -> OrbitClass {
        if altitude < 2000. {
            OrbitClass::Leo
        } else if altitude <= 35700. {
            OrbitClass::Meo
        } else if altitude <= 35900. {
            OrbitClass::Geo
        } else {
            OrbitClass::Heo
        }
    }
}

impl Display for OrbitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrbitClass::Leo => "LEO",
            OrbitClass::Meo => "MEO",
            OrbitClass::Geo => "GEO",
            OrbitClass::Heo => "HEO",
        };
        write!(f, "{label}")
    }
}

///Everything computed from one set of orbital elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    pub launch_year: i32,
    ///Seconds
    pub period: f64,
    ///km
    pub semi_major_axis: f64,
    ///km above the equatorial radius
    pub altitude: f64,
    pub orbit_class: OrbitClass,
    pub orbits_per_day: f64,
    ///km/s, circular orbit approximation
    pub speed: f64,
    pub eccentric_anomaly: f64,
    pub true_anomaly: f64,
    pub state_vector: StateVector,
}
