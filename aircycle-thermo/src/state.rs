use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::{GasProperties, ThermoError};

/// The thermodynamic state of the working gas at one point in a cycle.
///
/// A state is the triple of pressure, specific volume, and temperature.
/// Every state built by the process relations in this crate satisfies the
/// ideal gas law `P·v = R·T` to within floating-point error, because each
/// relation derives its outputs from a state that already does.
///
/// # Example
///
/// ```
/// use aircycle_thermo::{GasProperties, State};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::kilopascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let air = GasProperties::air();
/// let intake = State::from_pressure_temperature(
///     &air,
///     Pressure::new::<kilopascal>(100.0),
///     ThermodynamicTemperature::new::<kelvin>(300.0),
/// )?;
///
/// // v = R·T / P = 287 · 300 / 100_000
/// assert!((intake.specific_volume.value - 0.861).abs() < 1e-12);
/// # Ok::<(), aircycle_thermo::ThermoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub pressure: Pressure,
    pub specific_volume: SpecificVolume,
    pub temperature: ThermodynamicTemperature,
}

impl State {
    /// Creates a state from its three properties.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] if any property is not
    /// strictly positive and finite.
    pub fn new(
        pressure: Pressure,
        specific_volume: SpecificVolume,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, ThermoError> {
        for (name, value) in [
            ("pressure", pressure.value),
            ("specific_volume", specific_volume.value),
            ("temperature", temperature.value),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ThermoError::non_positive(name, value));
            }
        }

        Ok(Self {
            pressure,
            specific_volume,
            temperature,
        })
    }

    /// Creates a state from pressure and temperature using the ideal gas law,
    /// `v = R·T / P`.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] if pressure or temperature
    /// is not strictly positive and finite.
    pub fn from_pressure_temperature(
        gas: &GasProperties,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, ThermoError> {
        let specific_volume = gas.gas_constant() * temperature / pressure;
        Self::new(pressure, specific_volume, temperature)
    }
}
