use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{error::Result, satellite::Satellite, types::OrbitClass};

///Orbit summary of one satellite, angles in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub norad_id: u32,
    pub launch_year: i32,
    pub orbit_class: OrbitClass,
    pub observation_time: String,
    ///km
    pub altitude: f64,
    ///km/s
    pub speed: f64,
    ///Minutes
    pub period: f64,
    pub orbits_per_day: f64,
    pub inclination: f64,
    pub eccentricity: f64,
    pub raan: f64,
    pub arg_perigee: f64,
}

impl Report {
    pub fn new(sat: &Satellite) -> Result<Report> {
        let elements = sat.get_elements();
        let derived = elements.derive_all()?;
        Ok(Report {
            name: sat.get_name(),
            norad_id: elements.get_satellite_id(),
            launch_year: derived.launch_year,
            orbit_class: derived.orbit_class,
            observation_time: sat.get_epoch_string()?,
            altitude: derived.altitude,
            speed: derived.speed,
            period: derived.period / 60.,
            orbits_per_day: derived.orbits_per_day,
            inclination: elements.get_inclination().to_degrees(),
            eccentricity: elements.get_eccentricity(),
            raan: elements.get_raan().to_degrees(),
            arg_perigee: elements.get_arg_perigee().to_degrees(),
        })
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "------------------------------ {} ------------------------------", self.name)?;
        writeln!(f, "NORAD ID:                  {}", self.norad_id)?;
        writeln!(f, "Year Launched:             {}", self.launch_year)?;
        writeln!(f, "Orbit Type:                {}", self.orbit_class)?;
        writeln!(f)?;
        writeln!(f, "TLE observation time:      {}", self.observation_time)?;
        writeln!(f, "Altitude at time:          {:.2} km", self.altitude)?;
        writeln!(f, "Speed at time:             {:.2} km/s", self.speed)?;
        writeln!(f)?;
        writeln!(f, "Orbital Period:            {:.2} mins", self.period)?;
        writeln!(f, "Number of orbits per day:  {:.2}", self.orbits_per_day)?;
        writeln!(f, "Orbit inclination:         {:.2} degrees", self.inclination)?;
        writeln!(f, "Orbit eccentricity:        {:.5}", self.eccentricity)?;
        writeln!(f, "Orbit RAAN:                {:.2} degrees", self.raan)?;
        write!(f, "Orbit AOP:                 {:.2} degrees", self.arg_perigee)
    }
}
