//! Golden heliocentric positions at J2000.0 and at the March 2024 equinox.
//!
//! Values were produced by an independent evaluation of the same mean
//! elements and rounded to 1e-4.

use orrery_core::{Engine, Planet};
use orrery_time::CalendarDate;

/// (planet, M, E, v, r, lon, lat)
type Row = (Planet, f64, f64, f64, f64, f64, f64);

const AT_J2000: [Row; 8] = [
    (Planet::Mercury, 174.7939, 175.6812, 176.4938, 0.4665, 253.7846, -3.0222),
    (Planet::Venus, 50.2122, 50.5112, 50.8110, 0.7202, 182.6051, 3.2675),
    (Planet::EarthMoon, 357.5369, 357.4950, -2.5473, 0.9833, 100.3828, -0.0005),
    (Planet::Mars, 19.3493, 21.2918, 23.3270, 1.3912, 359.4243, -1.4248),
    (Planet::Jupiter, 20.1205, 21.1226, 22.1486, 4.9669, 36.4293, -1.1659),
    (Planet::Saturn, 317.0800, 314.8242, -47.4780, 9.1681, 45.4020, -2.3167),
    (Planet::Uranus, 140.7914, 142.4284, 144.0364, 19.9006, 316.4683, -0.6857),
    (Planet::Neptune, 258.2248, 257.7235, -102.7774, 30.1268, 303.9079, 0.2427),
];

const AT_2024_03_20: [Row; 8] = [
    (Planet::Mercury, 11.4921, 14.4278, 17.7264, 0.3100, 95.0085, 5.1093),
    (Planet::Venus, 181.0424, 181.0355, -178.9715, 0.7282, 312.7632, -2.8232),
    (Planet::EarthMoon, 75.1725, 76.1026, 77.0346, 0.9960, 180.0417, 0.0003),
    (Planet::Mars, 334.3102, 331.7801, -30.8641, 1.3983, 305.3208, -1.7926),
    (Planet::Jupiter, 34.9592, 36.6195, 38.3137, 4.9996, 52.6400, -0.9598),
    (Planet::Saturn, 253.0424, 250.0569, -112.9022, 9.7219, 340.0632, -1.8101),
    (Planet::Uranus, 244.5409, 242.1669, -120.1823, 19.6077, 52.2760, -0.2857),
    (Planet::Neptune, 311.1228, 310.7340, -49.6560, 29.8938, 357.0143, -1.2569),
];

const DEG_TOL: f64 = 2e-4;
const AU_TOL: f64 = 1e-4;

fn check(engine: &Engine, t: f64, rows: &[Row]) {
    for &(planet, m, e, v, r, lon, lat) in rows {
        let s = engine.planet_state(planet, t).unwrap();
        let close = |got: f64, want: f64, tol: f64, what: &str| {
            assert!(
                (got - want).abs() < tol,
                "{planet} T = {t}: {what} = {got}, expected {want}"
            );
        };
        close(s.elements.mean_anomaly_deg, m, DEG_TOL, "M");
        close(s.eccentric_anomaly_deg, e, DEG_TOL, "E");
        close(s.true_anomaly_deg, v, DEG_TOL, "v");
        close(s.position.distance(), r, AU_TOL, "r");
        close(s.position.heliocentric_longitude, lon, DEG_TOL, "lon");
        close(s.position.heliocentric_latitude, lat, DEG_TOL, "lat");
    }
}

#[test]
fn positions_at_j2000() {
    check(&Engine::default(), 0.0, &AT_J2000);
}

#[test]
fn positions_at_march_2024_equinox() {
    let date = CalendarDate::new(2024, 3, 20).unwrap();
    assert_eq!(date.julian_day(), 2_460_390.0);
    check(&Engine::default(), date.to_centuries(), &AT_2024_03_20);
}

#[test]
fn earth_sits_opposite_the_sun_at_equinox() {
    // Geocentric solar longitude near 0 means heliocentric Earth near 180.
    let date = CalendarDate::new(2024, 3, 20).unwrap();
    let earth = Engine::default()
        .planet_state_on(Planet::EarthMoon, date)
        .unwrap();
    assert!((earth.position.heliocentric_longitude - 180.0).abs() < 1.0);
}

#[test]
fn snapshot_matches_individual_states() {
    let engine = Engine::default();
    let date = CalendarDate::new(2024, 3, 20).unwrap();
    let snap = engine.snapshot_on(date).unwrap();
    for entry in &snap {
        let single = engine.planet_state_on(entry.state.planet, date).unwrap();
        assert_eq!(entry.state, single);
        assert_eq!(entry.orbit, single.orbit());
    }
}
