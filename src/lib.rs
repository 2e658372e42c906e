pub mod angles;
pub mod clock;
pub mod config;
pub mod error;
pub mod shadow;
pub mod sunlight;
pub mod types;

pub use angles::{
    dawn_for, rad_to_deg, seconds_per_degree, shadow_angle, sunset_for, DaylightWindow,
    HALF_SWEEP_DEGREES,
};

pub use clock::{
    add_offset, elapsed, format_clock, offset_to_seconds, parse_clock, seconds_to_offset,
    subtract_offset,
};

pub use config::{SunlightConfig, DEFAULT_CITY, DEFAULT_DAWN, DEFAULT_SUNSET};

pub use error::{Result, SunlightError};

pub use shadow::{west_angle, west_obstruction, EastShadow};

pub use sunlight::{compute, compute_city, compute_neighbourhood};

pub use types::{Building, City, Neighbourhood, Obstruction, SunlightHours};
