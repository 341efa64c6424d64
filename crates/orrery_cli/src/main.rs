use std::error::Error;

use clap::{Args, Parser, Subcommand, ValueEnum};
use orrery_core::{
    AnomalyTriple, Engine, EngineError, KeplerConfig, Planet, PlanetSnapshot, PlanetState,
    anomalies,
};
use orrery_frames::EllipseGeometry;
use orrery_time::{
    CalendarDate, DAYS_PER_CENTURY, J2000_JD, jd_to_calendar, julian_centuries,
    unix_ms_to_centuries,
};

#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Heliocentric planet positions from mean elements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Julian Day and Julian centuries for a date
    Jd {
        /// Gregorian date (YYYY-MM-DD, leading '-' for negative years)
        #[arg(long, allow_hyphen_values = true)]
        date: CalendarDate,
    },
    /// Elements, anomalies and position of one planet
    State {
        /// mercury, venus, earth_moon, mars, jupiter, saturn, uranus, neptune
        #[arg(long)]
        planet: Planet,
        #[command(flatten)]
        when: When,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Every planet with its projected orbit
    Snapshot {
        #[command(flatten)]
        when: When,
        /// Which planets to list
        #[arg(long, value_enum, default_value_t = Group::All)]
        group: Group,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Projected orbit ellipse of one planet
    Orbit {
        /// Planet identifier
        #[arg(long)]
        planet: Planet,
        #[command(flatten)]
        when: When,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solve Kepler's equation
    Kepler {
        /// Mean anomaly in degrees
        #[arg(long, allow_negative_numbers = true)]
        mean_anomaly: f64,
        /// Orbital eccentricity, 0 <= e < 1
        #[arg(long, allow_negative_numbers = true)]
        eccentricity: f64,
        /// Newton iteration cap
        #[arg(long, default_value_t = 100)]
        max_iterations: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Step a date by whole months and days
    Step {
        /// Starting date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        date: CalendarDate,
        /// Days to add (may be negative)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i64,
        /// Months to add before the days (may be negative)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        months: i32,
    },
    /// Julian centuries for a Unix timestamp
    Unix {
        /// Milliseconds since 1970-01-01T00:00:00Z
        #[arg(long, allow_negative_numbers = true)]
        ms: f64,
    },
}

/// Instant of a query: a calendar date or raw Julian centuries.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct When {
    /// Gregorian date (YYYY-MM-DD)
    #[arg(long, allow_hyphen_values = true)]
    date: Option<CalendarDate>,
    /// Julian centuries since J2000.0
    #[arg(long, allow_negative_numbers = true)]
    centuries: Option<f64>,
}

impl When {
    fn centuries(&self) -> f64 {
        match (self.date, self.centuries) {
            (Some(date), _) => date.to_centuries(),
            (None, Some(t)) => t,
            (None, None) => unreachable!("clap requires --date or --centuries"),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Group {
    /// Mercury to Mars
    Inner,
    /// Jupiter to Neptune
    Outer,
    All,
}

impl Group {
    fn contains(self, planet: Planet) -> bool {
        match self {
            Self::Inner => planet.index() <= Planet::Mars.index(),
            Self::Outer => planet.index() > Planet::Mars.index(),
            Self::All => true,
        }
    }
}

fn display_name(planet: Planet) -> &'static str {
    match planet {
        Planet::Mercury => "Mercury",
        Planet::Venus => "Venus",
        Planet::EarthMoon => "Earth/Moon",
        Planet::Mars => "Mars",
        Planet::Jupiter => "Jupiter",
        Planet::Saturn => "Saturn",
        Planet::Uranus => "Uranus",
        Planet::Neptune => "Neptune",
    }
}

/// Install the stderr logger. Warnings by default; RUST_LOG overrides.
/// A second call is a no-op.
fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();
    match run(cli) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let engine = Engine::default();

    let out = match cli.command {
        Commands::Jd { date } => {
            let jd = date.julian_day();
            format!(
                "{date}  JD {jd:.1}  T {:+.10} centuries",
                julian_centuries(jd)
            )
        }

        Commands::State { planet, when, json } => {
            let state = engine.planet_state(planet, when.centuries())?;
            if json {
                serde_json::to_string_pretty(&state)?
            } else {
                format_state(&state)
            }
        }

        Commands::Snapshot { when, group, json } => {
            let snapshot: Vec<PlanetSnapshot> = engine
                .snapshot(when.centuries())?
                .into_iter()
                .filter(|s| group.contains(s.state.planet))
                .collect();
            if json {
                serde_json::to_string_pretty(&snapshot)?
            } else {
                format_snapshot(&snapshot)
            }
        }

        Commands::Orbit { planet, when, json } => {
            let orbit = engine.orbit_ellipse(planet, when.centuries())?;
            if json {
                serde_json::to_string_pretty(&orbit)?
            } else {
                format!("{}\n{}", display_name(planet), format_orbit(&orbit))
            }
        }

        Commands::Kepler {
            mean_anomaly,
            eccentricity,
            max_iterations,
            json,
        } => {
            let triple = solve(mean_anomaly, eccentricity, max_iterations)?;
            if json {
                serde_json::to_string_pretty(&triple)?
            } else {
                format!(
                    "M {:.6} deg  E {:.6} deg  v {:.6} deg",
                    triple.mean_deg, triple.eccentric_deg, triple.true_deg
                )
            }
        }

        Commands::Step { date, days, months } => {
            let stepped = date.add_months(months)?.add_days(days)?;
            stepped.to_string()
        }

        Commands::Unix { ms } => {
            let t = unix_ms_to_centuries(ms);
            let Some((y, m, d)) = jd_to_calendar(J2000_JD + t * DAYS_PER_CENTURY) else {
                return Err(EngineError::InvalidQuery(
                    "timestamp outside the supported years -2999..=3000",
                )
                .into());
            };
            format!("T {t:+.10} centuries  (UTC date {y}-{m:02}-{d:02})")
        }
    };
    Ok(out)
}

fn solve(mean_anomaly: f64, e: f64, max_iterations: u32) -> Result<AnomalyTriple, EngineError> {
    if !(0.0..1.0).contains(&e) {
        return Err(EngineError::InvalidQuery("eccentricity must be in [0, 1)"));
    }
    if !mean_anomaly.is_finite() {
        return Err(EngineError::InvalidQuery("mean anomaly must be finite"));
    }
    let config = KeplerConfig {
        max_iterations,
        ..KeplerConfig::default()
    };
    config.validate().map_err(EngineError::InvalidConfig)?;
    anomalies(mean_anomaly, e, &config)
}

fn format_state(s: &PlanetState) -> String {
    let el = &s.elements;
    let [ox, oy, _] = s.position.orbital_coordinate;
    let [x, y, z] = s.position.ecliptic_coordinate;
    let mut lines = vec![
        format!("{} at T = {:+.8}", display_name(s.planet), s.centuries),
        format!("  a {:.8} AU  e {:.8}  I {:.6} deg", el.a, el.e, el.incl_deg),
        format!(
            "  L {:.6}  pi {:.6}  omega {:.6}  Omega {:.6}",
            el.mean_lon_deg, el.peri_lon_deg, el.arg_peri_deg, el.node_deg
        ),
        format!(
            "  M {:.6}  E {:.6}  v {:.6}",
            el.mean_anomaly_deg, s.eccentric_anomaly_deg, s.true_anomaly_deg
        ),
    ];
    lines.push(format!("  orbital   ({ox:.6}, {oy:.6}) AU"));
    lines.push(format!("  ecliptic  ({x:.6}, {y:.6}, {z:.6}) AU"));
    lines.push(format!(
        "  lon {:.4} deg  lat {:+.4} deg  r {:.6} AU",
        s.position.heliocentric_longitude,
        s.position.heliocentric_latitude,
        s.position.distance()
    ));
    lines.join("\n")
}

fn format_orbit(g: &EllipseGeometry) -> String {
    format!(
        "  rx {:.6} AU  ry {:.6} AU  dx {:.6} AU  theta {:.4} deg",
        g.rx, g.ry, g.dx, g.theta
    )
}

fn format_snapshot(entries: &[PlanetSnapshot]) -> String {
    let mut lines = vec![format!(
        "{:<12} {:>10} {:>9} {:>10} {:>10} {:>10}",
        "planet", "lon", "lat", "r (AU)", "rx (AU)", "theta"
    )];
    for entry in entries {
        let s = &entry.state;
        lines.push(format!(
            "{:<12} {:>10.4} {:>+9.4} {:>10.5} {:>10.5} {:>10.4}",
            display_name(s.planet),
            s.position.heliocentric_longitude,
            s.position.heliocentric_latitude,
            s.position.distance(),
            entry.orbit.rx,
            entry.orbit.theta
        ));
    }
    lines.join("\n")
}
