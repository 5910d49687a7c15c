//! Otto cycle: constant-volume heat addition.
//!
//! From the reference state 1: isentropic compression through the
//! compression ratio, isochoric addition of the specified heat, isentropic
//! expansion back to the reference volume, and isochoric rejection closing
//! the loop.

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
    let state_3 = process::isochoric_heat(gas, &state_2, heat_input)?;
    let state_4 = process::isentropic(gas, &state_3, state_1.specific_volume)?;

    Ok(SolvedCycle::new(
        *gas,
        vec![*state_1, state_2, state_3, state_4],
        vec![
            Process::IsentropicCompression,
            Process::IsochoricHeatAddition,
            Process::IsentropicExpansion,
            Process::IsochoricHeatRejection,
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, pressure::kilopascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::cycle::{CycleParameters, Reference, solve};

    fn textbook_otto() -> SolvedCycle {
        let air = GasProperties::air();
        let parameters = CycleParameters::Otto {
            compression_ratio: 14.0,
            heat_input: SpecificEnergy::new::<kilojoule_per_kilogram>(1390.72),
        };

        solve(&air, &parameters, Reference::default()).unwrap()
    }

    #[test]
    fn compression_state_matches_hand_calculation() {
        let solved = textbook_otto();
        let states = solved.states();

        // v1 = R·T1/P1 = 287·300/100000 = 0.861 m³/kg,
        // T2 = 300·14^0.4 ≈ 862.1 K, P2 = 100·14^1.4 ≈ 4023.3 kPa.
        assert_relative_eq!(states[0].specific_volume.value, 0.861);
        assert_relative_eq!(
            states[1].temperature.get::<kelvin>(),
            862.1,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            states[1].pressure.get::<kilopascal>(),
            4023.3,
            max_relative = 1e-4
        );
    }

    #[test]
    fn expansion_returns_to_the_reference_volume_exactly() {
        let solved = textbook_otto();
        let states = solved.states();

        assert_eq!(states[3].specific_volume, states[0].specific_volume);
    }

    #[test]
    fn heat_addition_happens_at_constant_volume() {
        let solved = textbook_otto();
        let states = solved.states();

        assert_eq!(states[2].specific_volume, states[1].specific_volume);

        // T3 = T2 + q/cv and P scales with T.
        let dt = 1390.72e3 / solved.gas().cv().value;
        assert_relative_eq!(
            states[2].temperature.get::<kelvin>(),
            states[1].temperature.get::<kelvin>() + dt,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            states[2].pressure.value / states[1].pressure.value,
            states[2].temperature.value / states[1].temperature.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn degenerate_ratios_are_rejected() {
        let air = GasProperties::air();
        let q = SpecificEnergy::new::<kilojoule_per_kilogram>(1390.72);
        let state_1 = State::from_pressure_temperature(
            &air,
            Reference::default().pressure,
            Reference::default().temperature,
        )
        .unwrap();

        assert_eq!(
            super::solve(&air, &state_1, 1.0, q),
            Err(ThermoError::InvalidParameter {
                name: "compression_ratio",
                value: 1.0,
                requirement: "greater than 1",
            })
        );
        assert!(super::solve(&air, &state_1, 14.0, q * 0.0).is_err());
    }
}
