use crate::clock;
use crate::error::Result;
use crate::types::validate_window;

/// The sun is modelled as sweeping this arc at constant speed between dawn
/// and sunset.
pub const HALF_SWEEP_DEGREES: f64 = 180.0;

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Seconds of daylight per degree of sun path.
pub fn seconds_per_degree(city_dawn: &str, city_sunset: &str) -> Result<f64> {
    let daylight = clock::elapsed(city_dawn, city_sunset)?;
    Ok(clock::offset_to_seconds(daylight) as f64 / HALF_SWEEP_DEGREES)
}

/// Elevation in degrees of the top of an obstruction rising
/// `height_difference` above the observer at `distance`. Zero when the
/// obstruction is not taller or not in front of the observer.
pub fn shadow_angle(height_difference: f64, distance: f64) -> f64 {
    if distance <= 0.0 || height_difference <= 0.0 {
        return 0.0;
    }
    rad_to_deg((height_difference / distance).atan())
}

/// Dawn delayed by the time the sun needs to clear `angle_east`.
pub fn dawn_for(angle_east: f64, seconds_per_degree: f64, city_dawn: &str) -> Result<String> {
    let (hours, minutes) = clock::seconds_to_offset(angle_east * seconds_per_degree);
    clock::add_offset(city_dawn, hours, minutes)
}

/// Sunset brought forward by the time the sun spends behind `angle_west`.
pub fn sunset_for(angle_west: f64, seconds_per_degree: f64, city_sunset: &str) -> Result<String> {
    let (hours, minutes) = clock::seconds_to_offset(angle_west * seconds_per_degree);
    clock::subtract_offset(city_sunset, hours, minutes)
}

/// A validated city sunlight window with its angular rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightWindow {
    pub dawn: String,
    pub sunset: String,
    pub seconds_per_degree: f64,
}

impl DaylightWindow {
    pub fn new(dawn: &str, sunset: &str) -> Result<Self> {
        validate_window(dawn, sunset)?;
        Ok(Self {
            dawn: dawn.to_string(),
            sunset: sunset.to_string(),
            seconds_per_degree: seconds_per_degree(dawn, sunset)?,
        })
    }

    pub fn dawn_for(&self, angle_east: f64) -> Result<String> {
        dawn_for(angle_east, self.seconds_per_degree, &self.dawn)
    }

    pub fn sunset_for(&self, angle_west: f64) -> Result<String> {
        sunset_for(angle_west, self.seconds_per_degree, &self.sunset)
    }
}
