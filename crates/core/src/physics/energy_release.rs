//! Energy Release Component (ERC)
//!
//! Available combustion energy, modelled as a weighted moisture deficit with
//! a fixed 70/30 dead/live fuel load split.

use super::clamp_index;
use crate::core_types::units::Percent;

/// Upper clamp for the energy release component
pub const ENERGY_RELEASE_COMPONENT_MAX: f64 = 97.0;

/// Share of the fuel load that is dead fuel
const DEAD_FUEL_WEIGHT: f64 = 0.7;

/// Share of the fuel load that is live fuel
const LIVE_FUEL_WEIGHT: f64 = 0.3;

/// Calculate the energy release component
///
/// # Formula
/// ```text
/// ERC = (0.7 × (1 − FM_dead/100) + 0.3 × (1 − FM_live/100)) × 100
/// ```
///
/// Live fuel moisture above 100% makes the live term negative, so turgid
/// vegetation actively reduces the ERC.
///
/// # Returns
/// Energy release component, clamped to 0-97
pub fn calculate_energy_release_component(
    dead_fuel_moisture: Percent,
    live_fuel_moisture: Percent,
) -> f64 {
    let dead_factor = DEAD_FUEL_WEIGHT * (1.0 - *dead_fuel_moisture / 100.0);
    let live_factor = LIVE_FUEL_WEIGHT * (1.0 - *live_fuel_moisture / 100.0);

    let erc = (dead_factor + live_factor) * 100.0;

    clamp_index(erc, 0.0, ENERGY_RELEASE_COMPONENT_MAX)
}
