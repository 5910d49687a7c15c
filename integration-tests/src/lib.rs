//! Shared fixtures for the aircycle integration tests.

use aircycle_components::cycle::CycleParameters;
use aircycle_thermo::units::SpecificEnergy;
use uom::si::available_energy::kilojoule_per_kilogram;

/// Builds a specific heat input in kJ/kg.
#[must_use]
pub fn heat_input(kilojoules_per_kilogram: f64) -> SpecificEnergy {
    SpecificEnergy::new::<kilojoule_per_kilogram>(kilojoules_per_kilogram)
}

/// The dual-cycle parameters of the reference engine study: a compression
/// ratio of 14, a constant-volume pressure ratio of 1.7, and the default
/// cutoff growth and peak-temperature cap.
#[must_use]
pub fn reference_dual_parameters() -> CycleParameters {
    CycleParameters::dual(14.0, 1.7)
}
