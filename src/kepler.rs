//! Kepler's equation, mean anomaly to eccentric and true anomaly.
use std::f64::consts::PI;

use tracing::{trace, warn};

use crate::{
    error::{Result, TleError},
    helpers::modulus,
};

pub const TOLERANCE: f64 = 1e-8;
pub const MAX_ITERATIONS: usize = 100;

///Solve E - e*sin(E) = M with Newton-Raphson. Stops once the Newton step is below
///`TOLERANCE`, which near the root bounds the residual as well since 1 - e*cos(E) >= 1 - e.
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> Result<f64> {
    let m = modulus(mean_anomaly, 2. * PI);
    let e = eccentricity;
    let mut guess = if m < PI { m + e / 2. } else { m - e / 2. };
    for iteration in 1..=MAX_ITERATIONS {
        let step = (guess - e * guess.sin() - m) / (1. - e * guess.cos());
        guess -= step;
        if step.abs() < TOLERANCE {
            trace!(iteration, e, m, "kepler converged");
            return Ok(guess);
        }
    }
    warn!(m, e, "kepler solver hit the iteration cap");
    Err(TleError::NonConvergence {
        iterations: MAX_ITERATIONS,
        mean_anomaly: m,
        eccentricity: e,
    })
}

///Only returns [0, pi], the side of the apse line is not recovered
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity;
    let cos_theta = (eccentric_anomaly.cos() - e) / (1. - e * eccentric_anomaly.cos());
    cos_theta.clamp(-1., 1.).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::assert_almost_eq;

    fn residual(e_anomaly: f64, e: f64, m: f64) -> f64 {
        (e_anomaly - e * e_anomaly.sin() - m).abs()
    }

    #[test]
    fn test_residual_grid() {
        for e_step in 0..=99 {
            let e = e_step as f64 / 100.;
            for m_step in 0..360 {
                let m = m_step as f64 * 2. * PI / 360.;
                let solved = eccentric_anomaly(m, e).unwrap();
                assert!(residual(solved, e, m) < 1e-7, "e={e} M={m} E={solved}");
            }
        }
    }

    #[test]
    fn test_circular() {
        assert_almost_eq(eccentric_anomaly(1.234, 0.).unwrap(), 1.234, 1e-12);
        assert_almost_eq(true_anomaly(1.234, 0.), 1.234, 1e-12);
    }

    #[test]
    fn test_known_value() {
        //Curtis example 3.1: e = 0.37255, M = 3.6029 rad, E = 3.4794 rad
        let e = eccentric_anomaly(3.6029, 0.37255).unwrap();
        assert_almost_eq(e, 3.4794, 1e-4);
    }

    #[test]
    fn test_mean_anomaly_wraps() {
        let wrapped = eccentric_anomaly(0.5 + 2. * PI, 0.1).unwrap();
        let direct = eccentric_anomaly(0.5, 0.1).unwrap();
        assert_almost_eq(wrapped, direct, 1e-12);
    }

    #[test]
    fn test_true_anomaly_range() {
        //Past apoapsis the recovered angle folds back into [0, pi]
        let e = 0.3;
        let before = true_anomaly(eccentric_anomaly(2., e).unwrap(), e);
        let after = true_anomaly(eccentric_anomaly(2. * PI - 2., e).unwrap(), e);
        assert_almost_eq(before, after, 1e-8);
        assert!((0. ..=PI).contains(&before));
        //Perigee and apogee
        assert_almost_eq(true_anomaly(0., e), 0., 1e-12);
        assert_almost_eq(true_anomaly(PI, e), PI, 1e-12);
    }

    #[test]
    fn test_non_convergence_reports_error() {
        //NaN never settles below the tolerance
        let err = eccentric_anomaly(f64::NAN, 0.5).unwrap_err();
        assert!(matches!(err, TleError::NonConvergence { iterations: MAX_ITERATIONS, .. }));
    }
}
