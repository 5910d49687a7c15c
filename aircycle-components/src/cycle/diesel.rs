//! Diesel cycle: constant-pressure heat addition.
//!
//! Identical to the Otto sequence except that combustion holds pressure
//! while the volume grows to the cutoff, so the same heat input produces a
//! smaller temperature rise (`cp` instead of `cv`).

use aircycle_thermo::{
    GasProperties, State, ThermoError,
    process::{self, Process},
    units::SpecificEnergy,
};

use super::SolvedCycle;

pub(crate) fn solve(
    gas: &GasProperties,
    state_1: &State,
    compression_ratio: f64,
    heat_input: SpecificEnergy,
) -> Result<SolvedCycle, ThermoError> {
    if !compression_ratio.is_finite() || compression_ratio <= 1.0 {
        return Err(ThermoError::InvalidParameter {
            name: "compression_ratio",
            value: compression_ratio,
            requirement: "greater than 1",
        });
    }
    if !heat_input.value.is_finite() || heat_input.value <= 0.0 {
        return Err(ThermoError::non_positive("heat_input", heat_input.value));
    }

    let state_2 = process::isentropic(gas, state_1, state_1.specific_volume / compression_ratio)?;
    let state_3 = process::isobaric_heat(gas, &state_2, heat_input)?;
    let state_4 = process::isentropic(gas, &state_3, state_1.specific_volume)?;

    Ok(SolvedCycle::new(
        *gas,
        vec![*state_1, state_2, state_3, state_4],
        vec![
            Process::IsentropicCompression,
            Process::IsobaricHeatAddition,
            Process::IsentropicExpansion,
            Process::IsochoricHeatRejection,
        ],
    ))
}
