//! Dual cycle: heat addition split between constant volume and constant
//! pressure.
//!
//! The isochoric leg is sized by a pressure ratio and the isobaric leg by
//! a cutoff coefficient. An optional peak-temperature cap cuts the
//! isobaric leg short: real engines limit peak combustion temperature for
//! material reasons, and the cap models that limit rather than any gas
//! behavior.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use aircycle_thermo::{
    GasProperties, State, ThermoError,
    process::{self, Process},
};

use super::SolvedCycle;

pub(crate) fn solve(
    gas: &GasProperties,
    state_1: &State,
    compression_ratio: f64,
    pressure_ratio: f64,
    cutoff_growth: Option<f64>,
    temperature_cap: Option<ThermodynamicTemperature>,
) -> Result<SolvedCycle, ThermoError> {
    if !compression_ratio.is_finite() || compression_ratio <= 1.0 {
        return Err(ThermoError::InvalidParameter {
            name: "compression_ratio",
            value: compression_ratio,
            requirement: "greater than 1",
        });
    }
    if !pressure_ratio.is_finite() || pressure_ratio <= 1.0 {
        return Err(ThermoError::InvalidParameter {
            name: "pressure_ratio",
            value: pressure_ratio,
            requirement: "greater than 1",
        });
    }

    let cutoff = match cutoff_growth {
        Some(alpha) if !alpha.is_finite() || alpha <= 1.0 => {
            return Err(ThermoError::InvalidParameter {
                name: "cutoff_growth",
                value: alpha,
                requirement: "greater than 1",
            });
        }
        Some(alpha) => alpha,
        // Empirical growth with compression ratio, taken from the
        // reference study this solver reproduces.
        None => 1.0 + 0.05 * (compression_ratio - 1.0),
    };

    let state_2 = process::isentropic(gas, state_1, state_1.specific_volume / compression_ratio)?;
    let state_3 = process::isochoric_pressure_ratio(&state_2, pressure_ratio)?;

    let t_3 = state_3.temperature.get::<kelvin>();
    let t_raw = t_3 * cutoff;
    let peak = match temperature_cap {
        Some(cap) if t_raw > cap.get::<kelvin>() => {
            if cap.get::<kelvin>() <= t_3 {
                return Err(ThermoError::InvalidParameter {
                    name: "temperature_cap",
                    value: cap.get::<kelvin>(),
                    requirement: "above the isochoric peak temperature when it engages",
                });
            }
            cap
        }
        _ => ThermodynamicTemperature::new::<kelvin>(t_raw),
    };
    let state_4 = process::isobaric_to_temperature(&state_3, peak)?;

    let state_5 = process::isentropic(gas, &state_4, state_1.specific_volume)?;

    Ok(SolvedCycle::new(
        *gas,
        vec![*state_1, state_2, state_3, state_4, state_5],
        vec![
            Process::IsentropicCompression,
            Process::IsochoricHeatAddition,
            Process::IsobaricHeatAddition,
            Process::IsentropicExpansion,
            Process::IsochoricHeatRejection,
        ],
    ))
}
