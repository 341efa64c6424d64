//! Mean orbital elements of the major planets.
//!
//! Keplerian elements and their rates with respect to the mean ecliptic and
//! equinox of J2000, valid for 3000 BC - 3000 AD.
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL Solar System Dynamics), tables 2a and 2b.

use crate::planet::Planet;

/// Six classical elements, or their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elements {
    /// Semi-major axis, AU.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination `I`, degrees.
    pub incl_deg: f64,
    /// Mean longitude `L`, degrees.
    pub mean_lon_deg: f64,
    /// Longitude of perihelion `ϖ`, degrees.
    pub peri_lon_deg: f64,
    /// Longitude of the ascending node `Ω`, degrees.
    pub node_deg: f64,
}

impl Elements {
    pub const fn new(
        a: f64,
        e: f64,
        incl_deg: f64,
        mean_lon_deg: f64,
        peri_lon_deg: f64,
        node_deg: f64,
    ) -> Self {
        Self {
            a,
            e,
            incl_deg,
            mean_lon_deg,
            peri_lon_deg,
            node_deg,
        }
    }
}

/// Elements at J2000.0 and their linear change per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElementSet {
    pub base: Elements,
    pub rate: Elements,
}

/// Extra mean-anomaly terms for the giant planets:
/// `b·T² + c·cos(f·T) + s·sin(f·T)`, with `f·T` in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionTerm {
    pub b: f64,
    pub c: f64,
    pub s: f64,
    pub f: f64,
}

impl CorrectionTerm {
    /// Correction to the mean anomaly in degrees at `t` Julian centuries.
    pub fn evaluate(&self, t: f64) -> f64 {
        let (sin_ft, cos_ft) = (self.f * t).to_radians().sin_cos();
        self.b * t * t + self.c * cos_ft + self.s * sin_ft
    }
}

#[rustfmt::skip]
const MERCURY: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(0.38709843, 0.20563661, 7.00559432, 252.25166724, 77.45771895, 48.33961819),
    rate: Elements::new(0.00000000, 0.00002123, -0.00590158, 149472.67486623, 0.15940013, -0.12214182),
};

#[rustfmt::skip]
const VENUS: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(0.72332102, 0.00676399, 3.39777545, 181.97970850, 131.76755713, 76.67261496),
    rate: Elements::new(-0.00000026, -0.00005107, 0.00043494, 58517.81560260, 0.05679648, -0.27274174),
};

#[rustfmt::skip]
const EARTH_MOON: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(1.00000018, 0.01673163, -0.00054346, 100.46691572, 102.93005885, -5.11260389),
    rate: Elements::new(-0.00000003, -0.00003661, -0.01337178, 35999.37306329, 0.31795260, -0.24123856),
};

#[rustfmt::skip]
const MARS: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(1.52371243, 0.09336511, 1.85181869, -4.56813164, -23.91744784, 49.71320984),
    rate: Elements::new(0.00000097, 0.00009149, -0.00724757, 19140.29934243, 0.45223625, -0.26852431),
};

#[rustfmt::skip]
const JUPITER: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(5.20248019, 0.04853590, 1.29861416, 34.33479152, 14.27495244, 100.29282654),
    rate: Elements::new(-0.00002864, 0.00018026, -0.00322699, 3034.90371757, 0.18199196, 0.13024619),
};

#[rustfmt::skip]
const SATURN: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(9.54149883, 0.05550825, 2.49424102, 50.07571329, 92.86136063, 113.63998702),
    rate: Elements::new(-0.00003065, -0.00032044, 0.00451969, 1222.11494724, 0.54179478, -0.25015002),
};

#[rustfmt::skip]
const URANUS: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(19.18797948, 0.04685740, 0.77298127, 314.20276625, 172.43404441, 73.96250215),
    rate: Elements::new(-0.00020455, -0.00001550, -0.00180155, 428.49512595, 0.09266985, 0.05739699),
};

#[rustfmt::skip]
const NEPTUNE: OrbitalElementSet = OrbitalElementSet {
    base: Elements::new(30.06952752, 0.00895439, 1.77005520, 304.22289287, 46.68158724, 131.78635853),
    rate: Elements::new(0.00006447, 0.00000818, 0.00022400, 218.46515314, 0.01009938, -0.00606302),
};

/// Element set of `planet`.
pub const fn element_set(planet: Planet) -> &'static OrbitalElementSet {
    match planet {
        Planet::Mercury => &MERCURY,
        Planet::Venus => &VENUS,
        Planet::EarthMoon => &EARTH_MOON,
        Planet::Mars => &MARS,
        Planet::Jupiter => &JUPITER,
        Planet::Saturn => &SATURN,
        Planet::Uranus => &URANUS,
        Planet::Neptune => &NEPTUNE,
    }
}

/// Mean-anomaly correction of `planet`, if it has one.
pub const fn correction(planet: Planet) -> Option<CorrectionTerm> {
    match planet {
        Planet::Jupiter => Some(CorrectionTerm {
            b: -0.00012452,
            c: 0.06064060,
            s: -0.35635438,
            f: 38.35125000,
        }),
        Planet::Saturn => Some(CorrectionTerm {
            b: 0.00025899,
            c: -0.13434469,
            s: 0.87320147,
            f: 38.35125000,
        }),
        Planet::Uranus => Some(CorrectionTerm {
            b: 0.00058331,
            c: -0.97731848,
            s: 0.17689245,
            f: 7.67025000,
        }),
        Planet::Neptune => Some(CorrectionTerm {
            b: -0.00041348,
            c: 0.68346318,
            s: -0.10162547,
            f: 7.67025000,
        }),
        Planet::Mercury | Planet::Venus | Planet::EarthMoon | Planet::Mars => None,
    }
}
