//! Heliocentric planet positions from low-precision mean orbital elements.
//!
//! The [`Engine`] turns a planet and a time (Julian centuries since J2000.0,
//! or a calendar date) into the planet's propagated elements, its anomalies,
//! its orbital-plane and ecliptic coordinates, and, on request, the
//! projected ellipse of its orbit for drawing.
//!
//! ```rust
//! use orrery_core::{Engine, Planet};
//! use orrery_time::{CalendarDate, supported_centuries};
//!
//! let engine = Engine::default();
//! let date = CalendarDate::new(2024, 3, 20).unwrap();
//! let mars = engine.planet_state_on(Planet::Mars, date).unwrap();
//! assert!((0.0..360.0).contains(&mars.position.heliocentric_longitude));
//! ```
//!
//! Every call is a pure function of its inputs; there is no cache and no
//! shared mutable state.

pub mod elements;
pub mod error;
pub mod kepler;
pub mod planet;
pub mod position;
pub mod propagate;

use orrery_frames::{EllipseGeometry, project_orbit};
use orrery_time::{CalendarDate, supported_centuries};
use serde::Serialize;

pub use elements::{CorrectionTerm, Elements, OrbitalElementSet, correction, element_set};
pub use error::EngineError;
pub use kepler::{
    AnomalyTriple, KeplerConfig, anomalies, orbital_position, solve_kepler, true_anomaly,
};
pub use planet::Planet;
pub use position::{Position, locate};
pub use propagate::{PropagatedElements, propagate, propagate_set};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub kepler: KeplerConfig,
}

impl EngineConfig {
    fn validate(&self) -> Result<(), EngineError> {
        self.kepler.validate().map_err(EngineError::InvalidConfig)
    }
}

/// Everything known about one planet at one instant.
///
/// Serialises flat, with the keys
/// `planet, T, a, e, I, L, pi, omega, Omega, M, E, v, orbital_coordinate,
/// ecliptic_coordinate, heliocentric_longitude, heliocentric_latitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetState {
    pub planet: Planet,
    /// Julian centuries since J2000.0.
    #[serde(rename = "T")]
    pub centuries: f64,
    #[serde(flatten)]
    pub elements: PropagatedElements,
    /// Eccentric anomaly, degrees.
    #[serde(rename = "E")]
    pub eccentric_anomaly_deg: f64,
    /// True anomaly, degrees.
    #[serde(rename = "v")]
    pub true_anomaly_deg: f64,
    #[serde(flatten)]
    pub position: Position,
}

impl PlanetState {
    /// The `(M, E, v)` triple.
    pub fn anomalies(&self) -> AnomalyTriple {
        AnomalyTriple {
            mean_deg: self.elements.mean_anomaly_deg,
            eccentric_deg: self.eccentric_anomaly_deg,
            true_deg: self.true_anomaly_deg,
        }
    }

    /// Projected ellipse of this planet's orbit.
    pub fn orbit(&self) -> EllipseGeometry {
        orbit_of(&self.elements)
    }
}

/// A planet's state together with its projected orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetSnapshot {
    #[serde(flatten)]
    pub state: PlanetState,
    pub orbit: EllipseGeometry,
}

fn orbit_of(el: &PropagatedElements) -> EllipseGeometry {
    project_orbit(el.a, el.e, el.incl_deg, el.arg_peri_deg, el.node_deg)
}

/// Stateless query engine.
///
/// `Engine` is `Copy`, [`Send`] and [`Sync`]; share it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine after validating the config.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Propagated elements of `planet` at `t` Julian centuries.
    ///
    /// `t` must fall inside [`supported_centuries`] (years -2999 to 3000);
    /// the linear element rates are meaningless beyond it.
    pub fn elements(&self, planet: Planet, t: f64) -> Result<PropagatedElements, EngineError> {
        check_time(t)?;
        Ok(propagate(planet, t))
    }

    /// Full state of `planet` at `t` Julian centuries since J2000.0.
    pub fn planet_state(&self, planet: Planet, t: f64) -> Result<PlanetState, EngineError> {
        let elements = self.elements(planet, t)?;
        let (anomaly, position) = locate(&elements, &self.config.kepler)?;
        Ok(PlanetState {
            planet,
            centuries: t,
            elements,
            eccentric_anomaly_deg: anomaly.eccentric_deg,
            true_anomaly_deg: anomaly.true_deg,
            position,
        })
    }

    /// Full state of `planet` at noon of `date`.
    pub fn planet_state_on(
        &self,
        planet: Planet,
        date: CalendarDate,
    ) -> Result<PlanetState, EngineError> {
        self.planet_state(planet, date.to_centuries())
    }

    /// Full state of `planet` at noon of an unvalidated `(year, month, day)`.
    pub fn planet_state_ymd(
        &self,
        planet: Planet,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<PlanetState, EngineError> {
        let date = CalendarDate::new(year, month, day)?;
        self.planet_state_on(planet, date)
    }

    /// Projected orbit ellipse of `planet` at `t` Julian centuries.
    pub fn orbit_ellipse(&self, planet: Planet, t: f64) -> Result<EllipseGeometry, EngineError> {
        Ok(orbit_of(&self.elements(planet, t)?))
    }

    /// State and orbit of every planet, in [`Planet::ALL`] order.
    pub fn snapshot(&self, t: f64) -> Result<Vec<PlanetSnapshot>, EngineError> {
        log::debug!("snapshot at T = {t}");
        Planet::ALL
            .iter()
            .map(|&planet| {
                let state = self.planet_state(planet, t)?;
                Ok(PlanetSnapshot {
                    orbit: state.orbit(),
                    state,
                })
            })
            .collect()
    }

    /// [`Engine::snapshot`] at noon of `date`.
    pub fn snapshot_on(&self, date: CalendarDate) -> Result<Vec<PlanetSnapshot>, EngineError> {
        self.snapshot(date.to_centuries())
    }
}

fn check_time(t: f64) -> Result<(), EngineError> {
    if !t.is_finite() {
        return Err(EngineError::InvalidQuery("time must be finite"));
    }
    if !supported_centuries().contains(&t) {
        return Err(EngineError::InvalidQuery(
            "time outside the element table's years -2999..=3000",
        ));
    }
    Ok(())
}
