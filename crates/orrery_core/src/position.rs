//! Heliocentric position from propagated elements.

use orrery_frames::{OrbitRotation, heliocentric_latitude, heliocentric_longitude};
use serde::Serialize;

use crate::error::EngineError;
use crate::kepler::{AnomalyTriple, KeplerConfig, anomalies, orbital_position};
use crate::propagate::PropagatedElements;

/// Where a planet is, in its own orbital plane and on the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Orbital-plane coordinate (AU), x toward perihelion, z = 0.
    pub orbital_coordinate: [f64; 3],
    /// Heliocentric ecliptic J2000 coordinate (AU).
    pub ecliptic_coordinate: [f64; 3],
    /// Degrees in [0, 360).
    pub heliocentric_longitude: f64,
    /// Degrees in [-90, 90].
    pub heliocentric_latitude: f64,
}

impl Position {
    /// Rotate an orbital-plane point onto the ecliptic and derive lon/lat.
    pub fn from_orbital(orbital: [f64; 3], elements: &PropagatedElements) -> Self {
        let rot = OrbitRotation::new(elements.incl_deg, elements.arg_peri_deg, elements.node_deg);
        let ecliptic = rot.apply(&orbital);
        Self {
            orbital_coordinate: orbital,
            ecliptic_coordinate: ecliptic,
            heliocentric_longitude: heliocentric_longitude(&ecliptic),
            heliocentric_latitude: heliocentric_latitude(&ecliptic),
        }
    }

    /// Distance from the Sun in AU.
    pub fn distance(&self) -> f64 {
        let [x, y, z] = self.ecliptic_coordinate;
        (x * x + y * y + z * z).sqrt()
    }
}

/// Solve for the anomalies and place the body.
pub fn locate(
    elements: &PropagatedElements,
    config: &KeplerConfig,
) -> Result<(AnomalyTriple, Position), EngineError> {
    let anomaly = anomalies(elements.mean_anomaly_deg, elements.e, config)?;
    let orbital = orbital_position(anomaly.true_deg, elements.a, elements.e);
    Ok((anomaly, Position::from_orbital(orbital, elements)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Elements, OrbitalElementSet};
    use crate::propagate::propagate_set;

    fn earth_like() -> OrbitalElementSet {
        OrbitalElementSet {
            base: Elements::new(1.0, 0.0167, 0.0, 100.46, 102.94, -11.26),
            rate: Elements::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        }
    }

    #[test]
    fn zero_inclination_stays_in_ecliptic() {
        let el = propagate_set(&earth_like(), None, 0.0);
        let (_, pos) = locate(&el, &KeplerConfig::default()).unwrap();
        assert_eq!(pos.ecliptic_coordinate[2], 0.0);
        assert_eq!(pos.heliocentric_latitude, 0.0);
    }

    #[test]
    fn earth_like_longitude_follows_true_anomaly() {
        // For I = 0, longitude = ϖ + v.
        let el = propagate_set(&earth_like(), None, 0.0);
        let (anomaly, pos) = locate(&el, &KeplerConfig::default()).unwrap();
        let expected = orrery_frames::normalize_360(el.peri_lon_deg + anomaly.true_deg);
        assert!((pos.heliocentric_longitude - expected).abs() < 1e-9);
        assert!((pos.distance() - 0.9833).abs() < 1e-3);
    }

    #[test]
    fn distance_preserved_by_rotation() {
        let set = OrbitalElementSet {
            base: Elements::new(1.52, 0.0934, 1.85, 355.4, 336.0, 49.6),
            rate: Elements::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        };
        let el = propagate_set(&set, None, 0.0);
        let (_, pos) = locate(&el, &KeplerConfig::default()).unwrap();
        let [x, y, _] = pos.orbital_coordinate;
        assert!((x.hypot(y) - pos.distance()).abs() < 1e-12);
    }
}
