//! Kepler's equation and the orbital-plane position.

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::EngineError;

/// Convergence settings for the Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerConfig {
    /// Stop when successive iterates differ by less than this (radians).
    pub tolerance_rad: f64,
    /// Iterations allowed before giving up (default 100).
    pub max_iterations: u32,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            tolerance_rad: 1e-6,
            max_iterations: 100,
        }
    }
}

impl KeplerConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.tolerance_rad.is_finite() && self.tolerance_rad > 0.0) {
            return Err("tolerance_rad must be finite and > 0");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

/// Mean, eccentric and true anomaly of one instant, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnomalyTriple {
    #[serde(rename = "M")]
    pub mean_deg: f64,
    #[serde(rename = "E")]
    pub eccentric_deg: f64,
    #[serde(rename = "v")]
    pub true_deg: f64,
}

/// Solve `E - e·sin E = M` for the eccentric anomaly.
///
/// Newton's method in radians starting from `E = π`, which converges for
/// every `0 <= e < 1`. Input and output are in degrees.
pub fn solve_kepler(
    mean_anomaly_deg: f64,
    e: f64,
    config: &KeplerConfig,
) -> Result<f64, EngineError> {
    let m = mean_anomaly_deg.to_radians();
    let mut x = PI;
    for iteration in 1..=config.max_iterations {
        let next = x - (e * x.sin() - x + m) / (e * x.cos() - 1.0);
        let step = (next - x).abs();
        x = next;
        if step < config.tolerance_rad {
            log::trace!("kepler: M={mean_anomaly_deg} e={e} converged in {iteration} iterations");
            return Ok(x.to_degrees());
        }
    }
    log::warn!(
        "kepler: no convergence after {} iterations (M={mean_anomaly_deg}, e={e})",
        config.max_iterations
    );
    Err(EngineError::NonConvergence {
        mean_anomaly_deg,
        eccentricity: e,
        iterations: config.max_iterations,
    })
}

/// True anomaly from eccentric anomaly, degrees.
///
/// `v = 2·atan(tan(E/2)·√((1+e)/(1-e)))`, in (-180, 180].
pub fn true_anomaly(eccentric_deg: f64, e: f64) -> f64 {
    let half = (eccentric_deg / 2.0).to_radians().tan();
    2.0 * (half * ((1.0 + e) / (1.0 - e)).sqrt()).atan().to_degrees()
}

/// Mean → eccentric → true anomaly.
pub fn anomalies(
    mean_anomaly_deg: f64,
    e: f64,
    config: &KeplerConfig,
) -> Result<AnomalyTriple, EngineError> {
    let eccentric_deg = solve_kepler(mean_anomaly_deg, e, config)?;
    Ok(AnomalyTriple {
        mean_deg: mean_anomaly_deg,
        eccentric_deg,
        true_deg: true_anomaly(eccentric_deg, e),
    })
}

/// Position in the orbital plane, x toward perihelion. z is always 0.
pub fn orbital_position(true_anomaly_deg: f64, a: f64, e: f64) -> [f64; 3] {
    let (sin_v, cos_v) = true_anomaly_deg.to_radians().sin_cos();
    let r = a * (1.0 - e * e) / (1.0 + e * cos_v);
    [r * cos_v, r * sin_v, 0.0]
}
