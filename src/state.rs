//! Classical elements to an Earth centered inertial state vector.
use crate::{
    constants::{KM, MU_EARTH},
    types::StateVector,
};

pub type Rotation = [[f64; 3]; 3];

///Perifocal to inertial direction cosine matrix, 3-1-3 sequence (raan, inclination, arg of perigee)
pub fn perifocal_to_eci(inclination: f64, raan: f64, arg_perigee: f64) -> Rotation {
    let (sin_raan, cos_raan) = raan.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_w, cos_w) = arg_perigee.sin_cos();
    [
        [
            cos_raan * cos_w - sin_raan * sin_w * cos_i,
            -cos_raan * sin_w - sin_raan * cos_w * cos_i,
            sin_raan * sin_i,
        ],
        [
            sin_raan * cos_w + cos_raan * sin_w * cos_i,
            -sin_raan * sin_w + cos_raan * cos_w * cos_i,
            -cos_raan * sin_i,
        ],
        [sin_w * sin_i, cos_w * sin_i, cos_i],
    ]
}

fn rotate(rotation: &Rotation, v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.; 3];
    for (row, value) in rotation.iter().zip(out.iter_mut()) {
        *value = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}

///Semi-major axis in km, angles in radians. Output in m and m/s
pub fn state_from_elements(
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    raan: f64,
    arg_perigee: f64,
    true_anomaly: f64,
) -> StateVector {
    let e = eccentricity;
    let p = semi_major_axis * (1. - e.powf(2.));
    let r_0 = p / (1. + e * true_anomaly.cos());
    let (sin_theta, cos_theta) = true_anomaly.sin_cos();
    let position_pqw = [r_0 * cos_theta, r_0 * sin_theta, 0.];
    let v_factor = (MU_EARTH / p).sqrt();
    let velocity_pqw = [-v_factor * sin_theta, v_factor * (e + cos_theta), 0.];

    let rotation = perifocal_to_eci(inclination, raan, arg_perigee);
    let position = rotate(&rotation, position_pqw).map(|x| x * KM);
    let velocity = rotate(&rotation, velocity_pqw).map(|x| x * KM);
    StateVector { position, velocity }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::helpers::{assert_almost_eq, dot, norm};

    #[test]
    fn test_equatorial() {
        let state = state_from_elements(7000., 0., 0., 0., 0., PI / 2.);
        assert_almost_eq(state.position[0], 0., 1e-6);
        assert_almost_eq(state.position[1], 7000. * KM, 1e-6);
        assert_almost_eq(state.position[2], 0., 1e-6);
        let circular_speed = (MU_EARTH / 7000.).sqrt() * KM;
        assert_almost_eq(state.velocity[0], -circular_speed, 1e-6);
        assert_almost_eq(state.velocity[1], 0., 1e-6);
    }

    #[test]
    fn test_circular_radius() {
        let state = state_from_elements(6794.6, 0.0001, 0.9, 3.6, 1.2, 0.44);
        let a = 6794.6 * KM;
        assert!((state.get_radius() - a).abs() / a < 1e-3);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let rotation = perifocal_to_eci(0.9, 3.6, 1.2);
        for i in 0..3 {
            let column_i = [rotation[0][i], rotation[1][i], rotation[2][i]];
            assert_almost_eq(norm(&column_i), 1., 1e-12);
            for j in (i + 1)..3 {
                let column_j = [rotation[0][j], rotation[1][j], rotation[2][j]];
                assert_almost_eq(dot(&column_i, &column_j), 0., 1e-12);
            }
        }
    }

    #[test]
    fn test_position_and_velocity_share_plane() {
        //Both vectors are rotated by the same matrix so both lie in the orbital plane
        let (i, raan, w) = (0.9_f64, 3.6_f64, 1.2);
        let normal = [i.sin() * raan.sin(), -i.sin() * raan.cos(), i.cos()];
        for theta in [0., 0.7, 2.1, 3.0] {
            let state = state_from_elements(8632.6, 0.186, i, raan, w, theta);
            assert_almost_eq(dot(&state.position, &normal) / state.get_radius(), 0., 1e-12);
            assert_almost_eq(dot(&state.velocity, &normal) / state.get_speed(), 0., 1e-12);
        }
    }

    #[test]
    fn test_vis_viva() {
        let (a, e) = (8632.6, 0.186);
        let state = state_from_elements(a, e, 0.6, 6.08, 5.79, 0.49);
        let r = state.get_radius() / KM;
        let v = state.get_speed() / KM;
        assert_almost_eq(v.powf(2.), MU_EARTH * (2. / r - 1. / a), 1e-9);
    }

    #[test]
    fn test_perigee_direction() {
        //At theta = 0 the position points along the first column of the rotation
        let rotation = perifocal_to_eci(0.6, 6.08, 5.79);
        let state = state_from_elements(8632.6, 0.186, 0.6, 6.08, 5.79, 0.);
        let r = state.get_radius();
        for row in 0..3 {
            assert_almost_eq(state.position[row] / r, rotation[row][0], 1e-12);
        }
    }
}
