//! Atkinson cycle: expansion continues past the compression volume.
//!
//! The expansion ratio exceeds the compression ratio, so the power stroke
//! ends back on the reference isobar instead of the reference volume, and
//! heat is rejected at constant pressure. The heat added at constant
//! volume is whatever amount makes that geometry close, which is why the
//! expansion endpoint is pinned before the combustion state.

use uom::si::{f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::kelvin};

use aircycle_thermo::{
    GasProperties, State, ThermoError,
    process::{self, Process},
};

use super::SolvedCycle;

pub(crate) fn solve(
    gas: &GasProperties,
    state_1: &State,
    compression_ratio: f64,
    expansion_ratio: f64,
) -> Result<SolvedCycle, ThermoError> {
    if !compression_ratio.is_finite() || compression_ratio <= 1.0 {
        return Err(ThermoError::InvalidParameter {
            name: "compression_ratio",
            value: compression_ratio,
            requirement: "greater than 1",
        });
    }
    if !expansion_ratio.is_finite() || expansion_ratio <= compression_ratio {
        return Err(ThermoError::InvalidParameter {
            name: "expansion_ratio",
            value: expansion_ratio,
            requirement: "greater than the compression ratio",
        });
    }

    let state_2 = process::isentropic(gas, state_1, state_1.specific_volume / compression_ratio)?;

    // The expansion endpoint sits on the reference isobar at v4 = re·v2,
    // which pins state 3 on the isentrope through it.
    let v_4 = state_2.specific_volume * expansion_ratio;
    let state_4 = State::new(
        state_1.pressure,
        v_4,
        ThermodynamicTemperature::new::<kelvin>(
            state_1.temperature.get::<kelvin>()
                * (v_4 / state_1.specific_volume).get::<ratio>(),
        ),
    )?;

    let state_3 = process::isentropic(gas, &state_4, state_2.specific_volume)?;

    Ok(SolvedCycle::new(
        *gas,
        vec![*state_1, state_2, state_3, state_4],
        vec![
            Process::IsentropicCompression,
            Process::IsochoricHeatAddition,
            Process::IsentropicExpansion,
            Process::IsobaricHeatRejection,
        ],
    ))
}
