//! Neighbourhood and city passes that attach per-floor dawn/sunset times to
//! every building.

use serde::Deserialize;
use serde_json::Value;

use crate::angles::DaylightWindow;
use crate::error::{Result, SunlightError};
use crate::shadow::{west_angle, EastShadow};
use crate::types::{City, Neighbourhood};

/// Replaces the `dawn` and `sunset` vectors of every building in place.
pub fn compute_neighbourhood(
    neighbourhood: &mut Neighbourhood,
    window: &DaylightWindow,
) -> Result<()> {
    let height = neighbourhood.apartments_height;
    let mut east = EastShadow::new();

    for index in 0..neighbourhood.buildings.len() {
        let buildings = &neighbourhood.buildings;
        let building = &buildings[index];
        let floors = building.apartments_count as usize;
        let mut dawn = Vec::with_capacity(floors);
        let mut sunset = Vec::with_capacity(floors);

        for floor in 0..building.apartments_count {
            let angle_east = east.angle(floor, height);
            let angle_west = west_angle(index, buildings, floor, height);
            dawn.push(window.dawn_for(angle_east)?);
            sunset.push(window.sunset_for(angle_west)?);
            log::trace!(
                "{} floor {}: east {:.2}°, west {:.2}°",
                building.name,
                floor,
                angle_east,
                angle_west
            );
        }

        let building = &mut neighbourhood.buildings[index];
        building.dawn = dawn;
        building.sunset = sunset;
        east = east.advance(index, building);
    }

    log::debug!(
        "computed {} buildings in neighbourhood {:?}",
        neighbourhood.buildings.len(),
        neighbourhood.name
    );
    Ok(())
}

pub fn compute_city(
    neighbourhoods: &mut [Neighbourhood],
    city_dawn: &str,
    city_sunset: &str,
) -> Result<()> {
    let window = DaylightWindow::new(city_dawn, city_sunset)?;
    for neighbourhood in neighbourhoods.iter_mut() {
        compute_neighbourhood(neighbourhood, &window)?;
    }
    Ok(())
}

/// Enriches a JSON list of neighbourhoods in place.
///
/// Returns `false` on malformed input or an invalid city window. Neighbourhoods
/// processed before the failure keep their results.
pub fn compute(city_info: &mut Value, city_dawn: &str, city_sunset: &str) -> bool {
    match compute_json(city_info, city_dawn, city_sunset) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("sunlight computation aborted: {}", err);
            false
        }
    }
}

fn compute_json(city_info: &mut Value, city_dawn: &str, city_sunset: &str) -> Result<()> {
    let window = DaylightWindow::new(city_dawn, city_sunset)?;
    let entries = city_info
        .as_array_mut()
        .ok_or_else(|| SunlightError::Malformed("expected a list of neighbourhoods".into()))?;

    for entry in entries.iter_mut() {
        let mut neighbourhood = Neighbourhood::deserialize(&*entry)?;
        compute_neighbourhood(&mut neighbourhood, &window)?;
        write_back(entry, &neighbourhood)?;
    }
    Ok(())
}

/// Copies computed times into the caller's objects, leaving other keys alone.
fn write_back(entry: &mut Value, neighbourhood: &Neighbourhood) -> Result<()> {
    let records = entry
        .get_mut("buildings")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| SunlightError::Malformed("neighbourhood without buildings".into()))?;

    for (record, building) in records.iter_mut().zip(&neighbourhood.buildings) {
        let record = record
            .as_object_mut()
            .ok_or_else(|| SunlightError::Malformed("building is not an object".into()))?;
        record.insert("dawn".into(), Value::from(building.dawn.clone()));
        record.insert("sunset".into(), Value::from(building.sunset.clone()));
    }
    Ok(())
}

impl City {
    /// Recomputes every neighbourhood against this city's window.
    pub fn compute(&mut self) -> Result<()> {
        log::debug!(
            "computing sunlight for {} ({} - {})",
            self.name,
            self.dawn,
            self.sunset
        );
        compute_city(&mut self.neighbourhoods, &self.dawn, &self.sunset)
    }

    /// Replaces the neighbourhoods with `city_info` and computes them.
    ///
    /// On error the city is left unchanged.
    pub fn initialize(&mut self, city_info: &str) -> Result<()> {
        let mut neighbourhoods: Vec<Neighbourhood> = serde_json::from_str(city_info)?;
        compute_city(&mut neighbourhoods, &self.dawn, &self.sunset)?;
        self.neighbourhoods = neighbourhoods;
        Ok(())
    }
}
