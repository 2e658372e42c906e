//! Obstruction search on both sides of an apartment.
//!
//! Buildings are visited east to west, so everything east of the current
//! building has already been seen: the east side keeps a single running
//! candidate ([`EastShadow`]). Nothing west of it has been seen yet, so the
//! west side is a fresh scan per apartment ([`west_obstruction`]).

use crate::angles::shadow_angle;
use crate::types::{Building, Obstruction};

/// Running east-side candidate, folded over one neighbourhood's buildings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EastShadow {
    candidate: Option<Obstruction>,
    best_ratio: Option<f64>,
    running_distance: f64,
}

impl EastShadow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstruction(&self) -> Option<Obstruction> {
        self.candidate
    }

    /// Folds in the building at `index` once all of its floors are done.
    ///
    /// The adopted candidate keeps the running distance at the moment it was
    /// adopted; later buildings do not lengthen it. A building with no
    /// ground between it and the next one is never adopted.
    pub fn advance(self, index: usize, building: &Building) -> Self {
        let running_distance = self.running_distance + building.distance;
        let ratio = building.apartments_count as f64 / running_distance;
        let replace = running_distance > 0.0
            && match self.best_ratio {
                None => true,
                Some(best) => ratio > best,
            };
        if !replace {
            return Self {
                running_distance,
                ..self
            };
        }
        log::trace!(
            "east candidate is now {} (index {}, ratio {:.3})",
            building.name,
            index,
            ratio
        );
        Self {
            candidate: Some(Obstruction {
                index,
                apartments_count: building.apartments_count,
                distance: running_distance,
            }),
            best_ratio: Some(ratio),
            running_distance,
        }
    }

    pub fn angle(&self, floor: u32, apartments_height: f64) -> f64 {
        obstruction_angle(self.candidate, floor, apartments_height)
    }
}

/// Finds the building west of `index` whose shadow reaches `floor` at the
/// steepest score. `None` means a clear view to the west.
pub fn west_obstruction(index: usize, buildings: &[Building], floor: u32) -> Option<Obstruction> {
    let floor = floor as f64;
    let mut accumulated = 0.0;
    let mut best: Option<(f64, Obstruction)> = None;

    for w_index in index..buildings.len().saturating_sub(1) {
        accumulated += buildings[w_index].distance;
        let candidate = &buildings[w_index + 1];
        let count = candidate.apartments_count as f64;
        if accumulated <= 0.0 || count < floor + 1.0 {
            continue;
        }
        // `floor - 1` rather than `floor + 1`: see DESIGN.md.
        let score = (count - (floor - 1.0)) / accumulated;
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((
                score,
                Obstruction {
                    index: w_index + 1,
                    apartments_count: candidate.apartments_count,
                    distance: accumulated,
                },
            ));
        }
    }

    best.map(|(_, obstruction)| obstruction)
}

pub fn west_angle(
    index: usize,
    buildings: &[Building],
    floor: u32,
    apartments_height: f64,
) -> f64 {
    obstruction_angle(
        west_obstruction(index, buildings, floor),
        floor,
        apartments_height,
    )
}

fn obstruction_angle(obstruction: Option<Obstruction>, floor: u32, apartments_height: f64) -> f64 {
    match obstruction {
        Some(o) => shadow_angle(
            (o.apartments_count as f64 - floor as f64) * apartments_height,
            o.distance,
        ),
        None => 0.0,
    }
}
