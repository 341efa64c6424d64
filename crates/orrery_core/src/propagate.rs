//! Secular propagation of the mean elements.

use orrery_frames::normalize_360;
use serde::Serialize;

use crate::elements::{CorrectionTerm, OrbitalElementSet, correction, element_set};
use crate::planet::Planet;

/// Elements evaluated at one instant.
///
/// Serialises with the conventional single-letter keys
/// (`a, e, I, L, pi, omega, Omega, M`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropagatedElements {
    /// Semi-major axis, AU.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination, degrees.
    #[serde(rename = "I")]
    pub incl_deg: f64,
    /// Mean longitude, degrees in [0, 360).
    #[serde(rename = "L")]
    pub mean_lon_deg: f64,
    /// Longitude of perihelion, degrees.
    #[serde(rename = "pi")]
    pub peri_lon_deg: f64,
    /// Argument of perihelion `ω = ϖ - Ω`, degrees, not normalised.
    #[serde(rename = "omega")]
    pub arg_peri_deg: f64,
    /// Longitude of the ascending node, degrees.
    #[serde(rename = "Omega")]
    pub node_deg: f64,
    /// Mean anomaly including any correction, degrees in [0, 360).
    #[serde(rename = "M")]
    pub mean_anomaly_deg: f64,
}

/// Evaluate `planet`'s elements at `t` Julian centuries past J2000.0.
///
/// Total for any `t`, but only meaningful for years -2999 to 3000; outside
/// them the eccentricity can drift below zero. [`crate::Engine`] rejects such
/// times.
pub fn propagate(planet: Planet, t: f64) -> PropagatedElements {
    propagate_set(element_set(planet), correction(planet), t)
}

/// Evaluate an arbitrary element set at `t` Julian centuries past J2000.0.
pub fn propagate_set(
    set: &OrbitalElementSet,
    fix: Option<CorrectionTerm>,
    t: f64,
) -> PropagatedElements {
    let (base, rate) = (&set.base, &set.rate);

    let a = base.a + rate.a * t;
    let e = base.e + rate.e * t;
    let incl_deg = base.incl_deg + rate.incl_deg * t;
    let mean_lon_deg = normalize_360(base.mean_lon_deg + rate.mean_lon_deg * t);
    let peri_lon_deg = base.peri_lon_deg + rate.peri_lon_deg * t;
    let node_deg = base.node_deg + rate.node_deg * t;

    let mut mean_anomaly_deg = mean_lon_deg - peri_lon_deg;
    if let Some(fix) = fix {
        mean_anomaly_deg += fix.evaluate(t);
    }

    PropagatedElements {
        a,
        e,
        incl_deg,
        mean_lon_deg,
        peri_lon_deg,
        arg_peri_deg: peri_lon_deg - node_deg,
        node_deg,
        mean_anomaly_deg: normalize_360(mean_anomaly_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Elements;

    #[test]
    fn epoch_returns_base_values() {
        for planet in Planet::ALL {
            let base = element_set(planet).base;
            let p = propagate(planet, 0.0);
            assert_eq!(p.a, base.a);
            assert_eq!(p.e, base.e);
            assert_eq!(p.incl_deg, base.incl_deg);
            assert_eq!(p.mean_lon_deg, normalize_360(base.mean_lon_deg));
            assert_eq!(p.peri_lon_deg, base.peri_lon_deg);
            assert_eq!(p.node_deg, base.node_deg);
        }
    }

    #[test]
    fn argument_of_perihelion_is_not_normalised() {
        // Mars: ϖ = -23.9, Ω = 49.7
        let p = propagate(Planet::Mars, 0.0);
        assert!(p.arg_peri_deg < 0.0);
        assert_eq!(p.arg_peri_deg, p.peri_lon_deg - p.node_deg);
    }

    #[test]
    fn mean_longitude_normalised() {
        let p = propagate(Planet::Mars, 0.0);
        assert!((p.mean_lon_deg - (360.0 - 4.56813164)).abs() < 1e-9);
        for t in [-30.0, -1.3, 0.7, 9.9] {
            let p = propagate(Planet::Mercury, t);
            assert!((0.0..360.0).contains(&p.mean_lon_deg));
            assert!((0.0..360.0).contains(&p.mean_anomaly_deg));
        }
    }

    #[test]
    fn inner_planet_mean_anomaly_is_l_minus_pi() {
        let t = 0.24;
        let p = propagate(Planet::Venus, t);
        let expected = normalize_360(p.mean_lon_deg - p.peri_lon_deg);
        assert!((p.mean_anomaly_deg - expected).abs() < 1e-12);
    }

    #[test]
    fn giant_mean_anomaly_includes_correction() {
        let t = 0.24;
        let p = propagate(Planet::Jupiter, t);
        let uncorrected = normalize_360(p.mean_lon_deg - p.peri_lon_deg);
        let fix = correction(Planet::Jupiter).unwrap().evaluate(t);
        let expected = normalize_360(uncorrected + fix);
        assert!((p.mean_anomaly_deg - expected).abs() < 1e-9);
        assert!((p.mean_anomaly_deg - uncorrected).abs() > 1e-3);
    }

    #[test]
    fn secular_drift_is_linear() {
        let set = OrbitalElementSet {
            base: Elements::new(1.0, 0.1, 2.0, 10.0, 20.0, 30.0),
            rate: Elements::new(0.01, 0.001, 0.5, 100.0, 1.0, -1.0),
        };
        let p = propagate_set(&set, None, 2.0);
        assert!((p.a - 1.02).abs() < 1e-12);
        assert!((p.e - 0.102).abs() < 1e-12);
        assert!((p.incl_deg - 3.0).abs() < 1e-12);
        assert!((p.mean_lon_deg - 210.0).abs() < 1e-12);
        assert!((p.peri_lon_deg - 22.0).abs() < 1e-12);
        assert!((p.node_deg - 28.0).abs() < 1e-12);
        assert!((p.arg_peri_deg + 6.0).abs() < 1e-12);
        assert!((p.mean_anomaly_deg - 188.0).abs() < 1e-12);
    }

    #[test]
    fn propagation_is_bit_identical() {
        for planet in Planet::ALL {
            assert_eq!(propagate(planet, 0.2417), propagate(planet, 0.2417));
        }
    }
}
