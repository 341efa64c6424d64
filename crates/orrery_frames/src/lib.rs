//! Frame conversion helpers for the orrery engine.
//!
//! Provides the orbital-plane → ecliptic rotation, heliocentric
//! longitude/latitude, and the projected orbit ellipse used for drawing.

pub mod angle;
pub mod ellipse;
pub mod rotation;
pub mod spherical;

pub use angle::{atan2_deg, normalize_360};
pub use ellipse::{EllipseGeometry, project_orbit};
pub use rotation::{OrbitRotation, to_ecliptic};
pub use spherical::{
    HeliocentricCoords, cartesian_to_heliocentric, heliocentric_latitude, heliocentric_longitude,
    heliocentric_to_cartesian,
};
