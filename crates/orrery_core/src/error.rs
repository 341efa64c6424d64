//! Error types for the orrery engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use orrery_time::TimeError;

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
    InvalidQuery(&'static str),
    /// Planet identifier not in the supported set.
    UnknownPlanet(String),
    /// Kepler's equation did not converge within the iteration cap.
    NonConvergence {
        mean_anomaly_deg: f64,
        eccentricity: f64,
        iterations: u32,
    },
    /// Calendar input rejected by `orrery_time`.
    Time(TimeError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::UnknownPlanet(name) => write!(f, "unknown planet: {name:?}"),
            Self::NonConvergence {
                mean_anomaly_deg,
                eccentricity,
                iterations,
            } => write!(
                f,
                "Kepler solver did not converge after {iterations} iterations \
                 (M = {mean_anomaly_deg} deg, e = {eccentricity})"
            ),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
