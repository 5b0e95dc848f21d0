use std::f64::consts::PI;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{EARTH_RADIUS_KM, MU_EARTH, SECONDS_PER_DAY},
    epoch::format_epoch,
    error::{Result, TleError},
    helpers::full_year,
    kepler,
    state::state_from_elements,
    tle::TleRecord,
    types::{DerivedQuantities, OrbitClass, StateVector},
};

///Elements of one TLE, angles in radians. Derived values are pure functions of these
#[derive(Debug, Clone, Serialize)]
pub struct OrbitalElements {
    satellite_id: u32,
    epoch_year_two_digit: u8,
    epoch_day_fraction: f64,
    ///rad/s
    mean_motion: f64,
    inclination: f64,
    raan: f64,
    arg_perigee: f64,
    mean_anomaly: f64,
    eccentricity: f64,
    #[serde(skip)]
    derived: OnceLock<DerivedQuantities>,
}

impl OrbitalElements {
    ///Angles in degrees and mean motion in revolutions per day, as written in a TLE
    pub fn from_record(record: &TleRecord) -> Result<OrbitalElements> {
        let e = record.eccentricity;
        if !(0. ..1.).contains(&e) {
            return Err(TleError::InvalidElements(format!(
                "eccentricity {e} outside [0, 1)"
            )));
        }
        if !record.mean_motion.is_finite() || record.mean_motion <= 0. {
            return Err(TleError::InvalidElements(format!(
                "mean motion {} rev/day gives no positive semi-major axis",
                record.mean_motion
            )));
        }
        let angles = [
            record.inclination,
            record.raan,
            record.arg_perigee,
            record.mean_anomaly,
        ];
        if angles.iter().any(|angle| !angle.is_finite()) {
            return Err(TleError::InvalidElements("non-finite angle".to_string()));
        }
        Ok(OrbitalElements {
            satellite_id: record.satellite_id,
            epoch_year_two_digit: record.epoch_year_two_digit,
            epoch_day_fraction: record.epoch_day_fraction,
            mean_motion: record.mean_motion * 2. * PI / SECONDS_PER_DAY,
            inclination: record.inclination.to_radians(),
            raan: record.raan.to_radians(),
            arg_perigee: record.arg_perigee.to_radians(),
            mean_anomaly: record.mean_anomaly.to_radians(),
            eccentricity: e,
            derived: OnceLock::new(),
        })
    }

    pub fn get_satellite_id(&self) -> u32 {
        self.satellite_id
    }
    pub fn get_epoch_year_two_digit(&self) -> u8 {
        self.epoch_year_two_digit
    }
    pub fn get_epoch_day_fraction(&self) -> f64 {
        self.epoch_day_fraction
    }
    pub fn get_mean_motion(&self) -> f64 {
        self.mean_motion
    }
    pub fn get_inclination(&self) -> f64 {
        self.inclination
    }
    pub fn get_raan(&self) -> f64 {
        self.raan
    }
    pub fn get_arg_perigee(&self) -> f64 {
        self.arg_perigee
    }
    pub fn get_mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }
    pub fn get_eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn get_launch_year(&self) -> i32 {
        full_year(self.epoch_year_two_digit)
    }
    ///Seconds
    pub fn get_period(&self) -> f64 {
        2. * PI / self.mean_motion
    }
    ///Kepler's third law, km
    pub fn get_semi_major_axis(&self) -> f64 {
        (MU_EARTH * (self.get_period() / (2. * PI)).powf(2.)).cbrt()
    }
    ///km above the equatorial radius
    pub fn get_altitude(&self) -> f64 {
        self.get_semi_major_axis() - EARTH_RADIUS_KM
    }
    pub fn get_orbit_type(&self) -> OrbitClass {
        OrbitClass::from_altitude(self.get_altitude())
    }
    pub fn get_orbits_per_day(&self) -> f64 {
        SECONDS_PER_DAY / self.get_period()
    }
    ///Circular orbit speed at the semi-major axis, km/s
    pub fn get_speed(&self) -> f64 {
        (MU_EARTH / self.get_semi_major_axis()).sqrt()
    }
    pub fn get_eccentric_anomaly(&self) -> Result<f64> {
        kepler::eccentric_anomaly(self.mean_anomaly, self.eccentricity)
    }
    pub fn get_true_anomaly(&self) -> Result<f64> {
        let eccentric_anomaly = self.get_eccentric_anomaly()?;
        Ok(kepler::true_anomaly(eccentric_anomaly, self.eccentricity))
    }
    ///Position (m) and velocity (m/s) at the TLE epoch
    pub fn get_state_vector(&self) -> Result<StateVector> {
        Ok(state_from_elements(
            self.get_semi_major_axis(),
            self.eccentricity,
            self.inclination,
            self.raan,
            self.arg_perigee,
            self.get_true_anomaly()?,
        ))
    }

    ///All derived values, computed once per instance
    pub fn derive_all(&self) -> Result<DerivedQuantities> {
        if let Some(derived) = self.derived.get() {
            return Ok(derived.clone());
        }
        let eccentric_anomaly = self.get_eccentric_anomaly()?;
        let true_anomaly = kepler::true_anomaly(eccentric_anomaly, self.eccentricity);
        let derived = DerivedQuantities {
            launch_year: self.get_launch_year(),
            period: self.get_period(),
            semi_major_axis: self.get_semi_major_axis(),
            altitude: self.get_altitude(),
            orbit_class: self.get_orbit_type(),
            orbits_per_day: self.get_orbits_per_day(),
            speed: self.get_speed(),
            eccentric_anomaly,
            true_anomaly,
            state_vector: state_from_elements(
                self.get_semi_major_axis(),
                self.eccentricity,
                self.inclination,
                self.raan,
                self.arg_perigee,
                true_anomaly,
            ),
        };
        debug!(id = self.satellite_id, period = derived.period, "derived orbit");
        Ok(self.derived.get_or_init(|| derived).clone())
    }
}

///Named object read from a TLE
#[derive(Debug, Clone, Serialize)]
pub struct Satellite {
    name: String,
    elements: OrbitalElements,
}

impl Satellite {
    pub fn new_from_tle(tle: &str) -> Result<Satellite> {
        Self::from_record(TleRecord::from_str_lines(tle)?)
    }
    pub fn new_from_lines(lines: [&str; 3]) -> Result<Satellite> {
        Self::from_record(TleRecord::from_lines(lines)?)
    }
    fn from_record(record: TleRecord) -> Result<Satellite> {
        let elements = OrbitalElements::from_record(&record)?;
        Ok(Satellite {
            name: record.name,
            elements,
        })
    }
    pub fn get_name(&self) -> String {
        self.name.to_string()
    }
    pub fn get_elements(&self) -> &OrbitalElements {
        &self.elements
    }
    pub fn into_parts(self) -> (String, OrbitalElements) {
        (self.name, self.elements)
    }
    ///`HH:MM:SS UTC D Month YYYY` of the TLE epoch
    pub fn get_epoch_string(&self) -> Result<String> {
        format_epoch(self.elements.epoch_day_fraction)
    }
}
