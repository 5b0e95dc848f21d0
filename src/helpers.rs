pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

///Two digit year to four digit year. No launches before 1961
pub fn full_year(two_digit: u8) -> i32 {
    if two_digit > 60 {
        1900 + two_digit as i32
    } else {
        2000 + two_digit as i32
    }
}

pub fn norm(v: &[f64; 3]) -> f64 {
    (v[0].powf(2.) + v[1].powf(2.) + v[2].powf(2.)).sqrt()
}

#[cfg(test)]
pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    if (a - b).abs() > tolerance {
        panic!("{a} != {b} (tolerance {tolerance})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_modulus() {
        assert_almost_eq(modulus(-1., 360.), 359., 1e-12);
        assert_almost_eq(modulus(725., 360.), 5., 1e-12);
    }
    #[test]
    fn test_full_year() {
        assert_eq!(full_year(60), 2060);
        assert_eq!(full_year(61), 1961);
        assert_eq!(full_year(0), 2000);
        assert_eq!(full_year(98), 1998);
    }
}
