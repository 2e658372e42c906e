//! City defaults and their TOML representation.
//!
//! ```toml
//! name = "Barcelona"
//! dawn = "08:14"
//! sunset = "17:25"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CITY: &str = "Barcelona";
pub const DEFAULT_DAWN: &str = "08:14";
pub const DEFAULT_SUNSET: &str = "17:25";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunlightConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_dawn")]
    pub dawn: String,
    #[serde(default = "default_sunset")]
    pub sunset: String,
}

fn default_name() -> String {
    DEFAULT_CITY.to_string()
}

fn default_dawn() -> String {
    DEFAULT_DAWN.to_string()
}

fn default_sunset() -> String {
    DEFAULT_SUNSET.to_string()
}

impl Default for SunlightConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            dawn: default_dawn(),
            sunset: default_sunset(),
        }
    }
}

impl SunlightConfig {
    /// Missing keys fall back to the Barcelona defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}
