//! Degree-based angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r >= 0.0 {
        return r;
    }
    // -1e-17 + 360.0 rounds to 360.0
    let wrapped = r + 360.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// `atan2(y, x)` in degrees, in (-180, 180].
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(1_494_976.0) - 256.0).abs() < 1e-9);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn atan2_quadrants() {
        assert!((atan2_deg(1.0, 0.0) - 90.0).abs() < 1e-12);
        assert!((atan2_deg(0.0, -1.0) - 180.0).abs() < 1e-12);
        assert!((atan2_deg(-1.0, -1.0) + 135.0).abs() < 1e-12);
    }
}
