use std::fmt;

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::config::SunlightConfig;
use crate::error::{Result, SunlightError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    /// One apartment per floor, floors `0..apartments_count` from the ground up.
    pub apartments_count: u32,
    /// Distance to the next building west; `-1` for the westernmost one.
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dawn: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sunset: Vec<String>,
}

impl Building {
    pub fn new(name: impl Into<String>, apartments_count: u32, distance: f64) -> Self {
        Self {
            name: name.into(),
            apartments_count,
            distance,
            dawn: Vec::new(),
            sunset: Vec::new(),
        }
    }

    pub fn sunlight_hours(&self, floor: u32) -> Option<SunlightHours> {
        let floor = floor as usize;
        Some(SunlightHours {
            dawn: self.dawn.get(floor)?.clone(),
            sunset: self.sunset.get(floor)?.clone(),
        })
    }
}

/// Buildings are ordered east to west; index 0 is the easternmost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbourhood {
    #[serde(rename = "neighborhood", alias = "neighbourhood", default)]
    pub name: String,
    pub apartments_height: f64,
    pub buildings: Vec<Building>,
}

impl Neighbourhood {
    pub fn new(name: impl Into<String>, apartments_height: f64, buildings: Vec<Building>) -> Self {
        Self {
            name: name.into(),
            apartments_height,
            buildings,
        }
    }

    pub fn building(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }
}

/// A building casting a shadow, with the ground distance the shadow crosses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstruction {
    pub index: usize,
    pub apartments_count: u32,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SunlightHours {
    pub dawn: String,
    pub sunset: String,
}

impl SunlightHours {
    /// Length of the sunlight window, or `None` when either end lies outside
    /// a single day.
    pub fn duration(&self) -> Option<TimeDelta> {
        let dawn = NaiveTime::parse_from_str(&self.dawn, "%H:%M").ok()?;
        let sunset = NaiveTime::parse_from_str(&self.sunset, "%H:%M").ok()?;
        Some(sunset - dawn)
    }
}

impl fmt::Display for SunlightHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.dawn, self.sunset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub dawn: String,
    pub sunset: String,
    #[serde(default)]
    pub neighbourhoods: Vec<Neighbourhood>,
}

impl City {
    /// Creates an empty city after checking that `dawn` precedes `sunset`.
    pub fn new(name: impl Into<String>, dawn: &str, sunset: &str) -> Result<Self> {
        validate_window(dawn, sunset)?;
        Ok(Self {
            name: name.into(),
            dawn: dawn.to_string(),
            sunset: sunset.to_string(),
            neighbourhoods: Vec::new(),
        })
    }

    pub fn from_config(config: &SunlightConfig) -> Result<Self> {
        Self::new(config.name.clone(), &config.dawn, &config.sunset)
    }

    pub fn neighbourhood(&self, name: &str) -> Option<&Neighbourhood> {
        self.neighbourhoods.iter().find(|n| n.name == name)
    }

    pub fn sunlight_hours(
        &self,
        neighbourhood: &str,
        building: &str,
        floor: u32,
    ) -> Option<SunlightHours> {
        self.neighbourhood(neighbourhood)?
            .building(building)?
            .sunlight_hours(floor)
    }
}

pub(crate) fn validate_window(dawn: &str, sunset: &str) -> Result<()> {
    let parse = |value: &str| {
        NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| SunlightError::InvalidClock {
            value: value.to_string(),
        })
    };
    if parse(dawn)? >= parse(sunset)? {
        return Err(SunlightError::DawnNotBeforeSunset {
            dawn: dawn.to_string(),
            sunset: sunset.to_string(),
        });
    }
    Ok(())
}
