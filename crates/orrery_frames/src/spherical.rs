//! Cartesian → heliocentric ecliptic longitude/latitude.

use serde::{Deserialize, Serialize};

use crate::angle::{atan2_deg, normalize_360};

/// Heliocentric ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from the Sun in AU.
    pub distance_au: f64,
}

/// Heliocentric longitude in degrees, [0, 360).
pub fn heliocentric_longitude(xyz: &[f64; 3]) -> f64 {
    normalize_360(atan2_deg(xyz[1], xyz[0]))
}

/// Heliocentric latitude in degrees, `atan(z / sqrt(x² + y²))`.
///
/// On the z axis this is ±90; at the origin it is 0.
pub fn heliocentric_latitude(xyz: &[f64; 3]) -> f64 {
    let rxy = xyz[0].hypot(xyz[1]);
    if rxy == 0.0 {
        return if xyz[2] == 0.0 { 0.0 } else { 90.0_f64.copysign(xyz[2]) };
    }
    (xyz[2] / rxy).atan().to_degrees()
}

/// Convert ecliptic Cartesian `[x, y, z]` (AU) to heliocentric coordinates.
pub fn cartesian_to_heliocentric(xyz: &[f64; 3]) -> HeliocentricCoords {
    let (x, y, z) = (xyz[0], xyz[1], xyz[2]);
    HeliocentricCoords {
        lon_deg: heliocentric_longitude(xyz),
        lat_deg: heliocentric_latitude(xyz),
        distance_au: (x * x + y * y + z * z).sqrt(),
    }
}

/// Convert heliocentric coordinates back to Cartesian `[x, y, z]` (AU).
pub fn heliocentric_to_cartesian(s: &HeliocentricCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance_au * cos_lat * cos_lon,
        s.distance_au * cos_lat * sin_lon,
        s.distance_au * sin_lat,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn along_x_axis() {
        let s = cartesian_to_heliocentric(&[1.0, 0.0, 0.0]);
        assert!((s.lon_deg - 0.0).abs() < EPS);
        assert!((s.lat_deg - 0.0).abs() < EPS);
        assert!((s.distance_au - 1.0).abs() < EPS);
    }

    #[test]
    fn along_negative_x() {
        let s = cartesian_to_heliocentric(&[-5.2, 0.0, 0.0]);
        assert!((s.lon_deg - 180.0).abs() < EPS);
    }

    #[test]
    fn longitude_always_positive() {
        let s = cartesian_to_heliocentric(&[-1.0, -1.0, 0.0]);
        assert!((s.lon_deg - 225.0).abs() < EPS);
        let s = cartesian_to_heliocentric(&[1.0, -1.0, 0.0]);
        assert!((s.lon_deg - 315.0).abs() < EPS);
    }

    #[test]
    fn latitude_from_tangent() {
        let s = cartesian_to_heliocentric(&[1.0, 0.0, 1.0]);
        assert!((s.lat_deg - 45.0).abs() < EPS);
        let s = cartesian_to_heliocentric(&[0.0, 2.0, -2.0]);
        assert!((s.lat_deg + 45.0).abs() < EPS);
    }

    #[test]
    fn poles_and_origin() {
        assert_eq!(heliocentric_latitude(&[0.0, 0.0, 3.0]), 90.0);
        assert_eq!(heliocentric_latitude(&[0.0, 0.0, -3.0]), -90.0);
        assert_eq!(heliocentric_latitude(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn roundtrip() {
        let xyz = [1.234, -5.678, 0.3456];
        let s = cartesian_to_heliocentric(&xyz);
        let back = heliocentric_to_cartesian(&s);
        for i in 0..3 {
            assert!(
                (xyz[i] - back[i]).abs() < EPS,
                "axis {i}: {:.12} != {:.12}",
                xyz[i],
                back[i]
            );
        }
    }
}
