//! Orbital-plane → ecliptic rotation.
//!
//! An orbit's plane is oriented by three angles: inclination `I`, argument
//! of perihelion `ω` and longitude of the ascending node `Ω`. The change of
//! basis from the orbital frame (x toward perihelion, z along the orbit
//! normal) to the ecliptic frame is
//!
//! ```text
//! R = Rz(-Ω) · Rx(-I) · Rz(-ω)
//! ```
//!
//! written out in closed form below. `R` is orthogonal, so its inverse is
//! its transpose.

/// Fixed 3×3 rotation from the orbital plane to ecliptic J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRotation {
    m: [[f64; 3]; 3],
}

impl OrbitRotation {
    /// Build the rotation from inclination, argument of perihelion and
    /// longitude of ascending node, all in degrees.
    pub fn new(inclination_deg: f64, arg_perihelion_deg: f64, node_deg: f64) -> Self {
        let (sin_i, cos_i) = inclination_deg.to_radians().sin_cos();
        let (sin_w, cos_w) = arg_perihelion_deg.to_radians().sin_cos();
        let (sin_n, cos_n) = node_deg.to_radians().sin_cos();
        Self {
            m: [
                [
                    cos_w * cos_n - cos_i * sin_w * sin_n,
                    -cos_n * sin_w - cos_i * cos_w * sin_n,
                    sin_i * sin_n,
                ],
                [
                    cos_i * cos_n * sin_w + cos_w * sin_n,
                    cos_i * cos_w * cos_n - sin_w * sin_n,
                    -cos_n * sin_i,
                ],
                [sin_i * sin_w, cos_w * sin_i, cos_i],
            ],
        }
    }

    /// Matrix entries, row-major.
    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    /// Map an orbital-plane point into ecliptic coordinates.
    pub fn apply(&self, p: &[f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            m[0][0] * p[0] + m[0][1] * p[1] + m[0][2] * p[2],
            m[1][0] * p[0] + m[1][1] * p[1] + m[1][2] * p[2],
            m[2][0] * p[0] + m[2][1] * p[1] + m[2][2] * p[2],
        ]
    }

    /// Map an ecliptic point back into the orbital plane (transpose).
    pub fn apply_inverse(&self, p: &[f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            m[0][0] * p[0] + m[1][0] * p[1] + m[2][0] * p[2],
            m[0][1] * p[0] + m[1][1] * p[1] + m[2][1] * p[2],
            m[0][2] * p[0] + m[1][2] * p[1] + m[2][2] * p[2],
        ]
    }

    /// The inverse rotation as its own matrix.
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }
}

/// Transform an orbital-plane point to ecliptic coordinates.
///
/// Shorthand for `OrbitRotation::new(i, ω, Ω).apply(point)`. Build the
/// [`OrbitRotation`] once when transforming several points of one orbit.
pub fn to_ecliptic(
    point: &[f64; 3],
    inclination_deg: f64,
    arg_perihelion_deg: f64,
    node_deg: f64,
) -> [f64; 3] {
    OrbitRotation::new(inclination_deg, arg_perihelion_deg, node_deg).apply(point)
}
