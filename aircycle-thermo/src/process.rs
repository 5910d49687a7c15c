//! Process relations connecting the states of an air-standard cycle.
//!
//! Each function advances a state along one idealized process leg and
//! returns the resulting state. All relations are closed-form; nothing
//! iterates or converges. Bad input is rejected at the call, either here
//! or by [`State::new`] when a derived property comes out non-positive.

use uom::si::{
    f64::{SpecificVolume, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{GasProperties, State, ThermoError, units::SpecificEnergy};

/// The idealized process legs an air-standard cycle is built from.
///
/// Heat-transfer legs are labeled by direction so a solved cycle can be
/// split into its heat input and heat rejection without re-deriving signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Process {
    /// Reversible adiabatic compression, `P·v^k` constant.
    IsentropicCompression,
    /// Reversible adiabatic expansion, `P·v^k` constant.
    IsentropicExpansion,
    /// Heat added at constant volume.
    IsochoricHeatAddition,
    /// Heat rejected at constant volume.
    IsochoricHeatRejection,
    /// Heat added at constant pressure.
    IsobaricHeatAddition,
    /// Heat rejected at constant pressure.
    IsobaricHeatRejection,
}

impl Process {
    /// Whether this leg exchanges no heat with the surroundings.
    #[must_use]
    pub fn is_isentropic(self) -> bool {
        matches!(self, Self::IsentropicCompression | Self::IsentropicExpansion)
    }

    /// Whether this leg adds heat to the gas.
    #[must_use]
    pub fn is_heat_addition(self) -> bool {
        matches!(self, Self::IsochoricHeatAddition | Self::IsobaricHeatAddition)
    }

    /// Whether this leg rejects heat from the gas.
    #[must_use]
    pub fn is_heat_rejection(self) -> bool {
        matches!(self, Self::IsochoricHeatRejection | Self::IsobaricHeatRejection)
    }
}

/// Advances a state along an isentrope to a target specific volume.
///
/// With the volume ratio `r = v / v_target`, the ideal-gas isentropic
/// relations give `P_target = P·r^k` and `T_target = T·r^(k−1)`; `r > 1`
/// is compression and `r < 1` expansion. The target volume is carried into
/// the result unchanged, so a leg that expands back to a known volume lands
/// on that exact value.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] if `target_volume` is not
/// strictly positive and finite.
pub fn isentropic(
    gas: &GasProperties,
    from: &State,
    target_volume: SpecificVolume,
) -> Result<State, ThermoError> {
    if !target_volume.value.is_finite() || target_volume.value <= 0.0 {
        return Err(ThermoError::non_positive(
            "target_volume",
            target_volume.value,
        ));
    }

    let k = gas.heat_capacity_ratio();
    let r = (from.specific_volume / target_volume).get::<ratio>();

    let pressure = from.pressure * r.powf(k);
    let temperature =
        ThermodynamicTemperature::new::<kelvin>(from.temperature.get::<kelvin>() * r.powf(k - 1.0));

    State::new(pressure, target_volume, temperature)
}

/// Adds (or, for negative `q`, rejects) heat at constant volume.
///
/// The temperature rises by `q / cv` and the pressure scales with the
/// absolute temperature.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] if the heat rejected drives
/// the resulting state non-physical.
pub fn isochoric_heat(
    gas: &GasProperties,
    from: &State,
    q: SpecificEnergy,
) -> Result<State, ThermoError> {
    let t_from = from.temperature.get::<kelvin>();
    let t = t_from + (q / gas.cv()).get::<delta_kelvin>();

    State::new(
        from.pressure * (t / t_from),
        from.specific_volume,
        ThermodynamicTemperature::new::<kelvin>(t),
    )
}

/// Scales pressure and temperature together at constant volume.
///
/// An isochoric heat-addition leg specified by its pressure ratio rather
/// than by the heat added: `P' = rp·P` and `T' = rp·T`.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] if `pressure_ratio` is not
/// strictly positive and finite.
pub fn isochoric_pressure_ratio(from: &State, pressure_ratio: f64) -> Result<State, ThermoError> {
    if !pressure_ratio.is_finite() || pressure_ratio <= 0.0 {
        return Err(ThermoError::non_positive("pressure_ratio", pressure_ratio));
    }

    State::new(
        from.pressure * pressure_ratio,
        from.specific_volume,
        ThermodynamicTemperature::new::<kelvin>(
            from.temperature.get::<kelvin>() * pressure_ratio,
        ),
    )
}

/// Adds (or, for negative `q`, rejects) heat at constant pressure.
///
/// The temperature rises by `q / cp` and the specific volume scales with
/// the absolute temperature.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] if the heat rejected drives
/// the resulting state non-physical.
pub fn isobaric_heat(
    gas: &GasProperties,
    from: &State,
    q: SpecificEnergy,
) -> Result<State, ThermoError> {
    let t_from = from.temperature.get::<kelvin>();
    let t = t_from + (q / gas.cp()).get::<delta_kelvin>();

    State::new(
        from.pressure,
        from.specific_volume * (t / t_from),
        ThermodynamicTemperature::new::<kelvin>(t),
    )
}

/// Moves a state to a target temperature at constant pressure.
///
/// The specific volume scales with the absolute temperature,
/// `v' = v·(T' / T)`.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] if `temperature` is not
/// strictly positive and finite.
pub fn isobaric_to_temperature(
    from: &State,
    temperature: ThermodynamicTemperature,
) -> Result<State, ThermoError> {
    if !temperature.value.is_finite() || temperature.value <= 0.0 {
        return Err(ThermoError::non_positive("temperature", temperature.value));
    }

    let scale = temperature.get::<kelvin>() / from.temperature.get::<kelvin>();

    State::new(from.pressure, from.specific_volume * scale, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, pressure::kilopascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::units::TemperatureOps;

    fn intake_air() -> (GasProperties, State) {
        let air = GasProperties::air();
        let state = State::from_pressure_temperature(
            &air,
            uom::si::f64::Pressure::new::<kilopascal>(100.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        )
        .unwrap();
        (air, state)
    }

    #[test]
    fn isentropic_compression_preserves_the_isentrope() {
        let (air, s1) = intake_air();
        let k = air.heat_capacity_ratio();

        let s2 = isentropic(&air, &s1, s1.specific_volume / 14.0).unwrap();

        // P·v^k is invariant along the leg.
        assert_relative_eq!(
            s2.pressure.value * s2.specific_volume.value.powf(k),
            s1.pressure.value * s1.specific_volume.value.powf(k),
            max_relative = 1e-12
        );

        // Known hand-calculated values for rc = 14:
        //   T2 = 300 · 14^0.4 ≈ 862.1 K
        //   P2 = 100 · 14^1.4 ≈ 4023.3 kPa
        assert_relative_eq!(s2.temperature.get::<kelvin>(), 862.1, max_relative = 1e-4);
        assert_relative_eq!(s2.pressure.get::<kilopascal>(), 4023.3, max_relative = 1e-4);
    }

    #[test]
    fn isentropic_expansion_lands_on_the_target_volume_exactly() {
        let (air, s1) = intake_air();

        let s2 = isentropic(&air, &s1, s1.specific_volume / 14.0).unwrap();
        let s3 = isentropic(&air, &s2, s1.specific_volume).unwrap();

        assert_eq!(s3.specific_volume, s1.specific_volume);
        assert_relative_eq!(
            s3.temperature.get::<kelvin>(),
            s1.temperature.get::<kelvin>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn isochoric_heat_addition_raises_temperature_by_q_over_cv() {
        let (air, s1) = intake_air();
        let q = SpecificEnergy::new::<kilojoule_per_kilogram>(717.5);

        let s2 = isochoric_heat(&air, &s1, q).unwrap();

        // q / cv = 717.5 kJ/kg ÷ 717.5 J/kg·K = 1000 K.
        assert_relative_eq!(
            s2.temperature.minus(s1.temperature).value,
            1000.0,
            max_relative = 1e-12
        );
        assert_eq!(s2.specific_volume, s1.specific_volume);
        assert_relative_eq!(
            s2.pressure.value / s1.pressure.value,
            s2.temperature.value / s1.temperature.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn isochoric_rejection_below_absolute_zero_is_rejected() {
        let (air, s1) = intake_air();
        let q = SpecificEnergy::new::<kilojoule_per_kilogram>(-10_000.0);

        assert!(isochoric_heat(&air, &s1, q).is_err());
    }

    #[test]
    fn pressure_ratio_leg_scales_pressure_and_temperature_together() {
        let (_, s1) = intake_air();

        let s2 = isochoric_pressure_ratio(&s1, 1.7).unwrap();

        assert_relative_eq!(s2.pressure.value, 1.7 * s1.pressure.value);
        assert_relative_eq!(s2.temperature.value, 1.7 * s1.temperature.value);
        assert_eq!(s2.specific_volume, s1.specific_volume);

        assert!(isochoric_pressure_ratio(&s1, 0.0).is_err());
    }

    #[test]
    fn isobaric_heat_addition_scales_volume_with_temperature() {
        let (air, s1) = intake_air();
        let q = SpecificEnergy::new::<kilojoule_per_kilogram>(1004.5);

        let s2 = isobaric_heat(&air, &s1, q).unwrap();

        // q / cp = 1004.5 kJ/kg ÷ 1004.5 J/kg·K = 1000 K.
        assert_relative_eq!(s2.temperature.value, 1300.0, max_relative = 1e-12);
        assert_eq!(s2.pressure, s1.pressure);
        assert_relative_eq!(
            s2.specific_volume.value / s1.specific_volume.value,
            1300.0 / 300.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn isobaric_move_to_temperature_scales_volume() {
        let (_, s1) = intake_air();
        let target = ThermodynamicTemperature::new::<kelvin>(600.0);

        let s2 = isobaric_to_temperature(&s1, target).unwrap();

        assert_eq!(s2.temperature, target);
        assert_eq!(s2.pressure, s1.pressure);
        assert_relative_eq!(s2.specific_volume.value, 2.0 * s1.specific_volume.value);
    }
}
