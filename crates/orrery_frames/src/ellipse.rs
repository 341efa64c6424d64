//! Projection of an orbit ellipse onto the ecliptic plane.
//!
//! An inclined ellipse seen along the ecliptic pole is still an ellipse,
//! but with shorter axes and a rotated major axis. Three points of the true
//! orbit are enough to recover the drawing parameters exactly: the centre
//! `O`, the perihelion end of the major axis `A`, and one end of the minor
//! axis `B`. With the Sun at the origin and `c = e·a`:
//!
//! ```text
//! O = (-c, 0, 0)    A = (a - c, 0, 0)    B = (-c, b, 0)
//! ```
//!
//! Only the x and y components of the transformed points are used.

use serde::{Deserialize, Serialize};

use crate::angle::{atan2_deg, normalize_360};
use crate::rotation::OrbitRotation;

/// Drawing parameters of a projected orbit.
///
/// To draw: an axis-aligned ellipse with half-axes `rx`, `ry` centred on the
/// origin, translated by `-dx` along x, then rotated by `theta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseGeometry {
    /// Projected semi-major length (AU).
    pub rx: f64,
    /// Projected semi-minor length (AU).
    pub ry: f64,
    /// Projected distance from the ellipse centre to the Sun (AU).
    pub dx: f64,
    /// Direction of the projected major axis toward perihelion, degrees in [0, 360).
    pub theta: f64,
}

fn planar_distance(p: &[f64; 3], q: &[f64; 3]) -> f64 {
    (p[0] - q[0]).hypot(p[1] - q[1])
}

/// Project the orbit with the given shape and orientation onto the ecliptic.
///
/// Angles are in degrees, `a` in AU. Requires `a > 0` and `0 <= e < 1`.
pub fn project_orbit(
    a: f64,
    e: f64,
    inclination_deg: f64,
    arg_perihelion_deg: f64,
    node_deg: f64,
) -> EllipseGeometry {
    let c = e * a;
    let b = (a * a - c * c).sqrt();

    let rot = OrbitRotation::new(inclination_deg, arg_perihelion_deg, node_deg);
    let o = rot.apply(&[-c, 0.0, 0.0]);
    let pa = rot.apply(&[a - c, 0.0, 0.0]);
    let pb = rot.apply(&[-c, b, 0.0]);

    EllipseGeometry {
        rx: planar_distance(&pa, &o),
        ry: planar_distance(&pb, &o),
        dx: o[0].hypot(o[1]),
        theta: normalize_360(atan2_deg(pa[1] - o[1], pa[0] - o[0])),
    }
}
