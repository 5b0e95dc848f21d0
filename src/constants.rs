//! Physical constants used by the orbit engine. Read only.

/// Earth gravitational parameter (km³/s²)
pub const MU_EARTH: f64 = 398600.4418;
/// Earth equatorial radius (km), also the radius of the plotting reference sphere
pub const EARTH_RADIUS_KM: f64 = 6378.1370;
pub const SECONDS_PER_DAY: f64 = 86400.;
/// Metres per kilometre, applied at the state vector boundary
pub const KM: f64 = 1000.;
