//! Converging nozzle flow from stagnation conditions.
//!
//! A converging nozzle fed from a reservoir at stagnation pressure and
//! temperature accelerates the gas toward its throat. Once the back
//! pressure falls to the critical fraction of the stagnation pressure the
//! throat reaches the speed of sound and the nozzle chokes: mass flow
//! stops responding to the back pressure. Below that threshold the flow
//! stays subsonic and both throat velocity and mass flow follow the
//! isentropic relations for the actual pressure ratio.

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Area, MassRate, Pressure, ThermodynamicTemperature, Velocity},
    mass_rate::kilogram_per_second,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use aircycle_thermo::{GasProperties, ThermoError};

/// Stagnation (total) conditions feeding the nozzle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagnationConditions {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

/// Flow regime at the nozzle throat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Sonic throat; mass flow is independent of the back pressure.
    Choked,
    /// Subsonic throat; the back pressure is felt throughout.
    Subsonic,
}

/// Flow through the nozzle throat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleFlow {
    pub regime: FlowRegime,
    pub throat_velocity: Velocity,
    pub mass_flow: MassRate,
}

/// The back-to-stagnation pressure ratio below which the nozzle chokes,
/// `(2 / (k + 1))^(k / (k − 1))`.
///
/// About 0.528 for air.
#[must_use]
pub fn critical_pressure_ratio(gas: &GasProperties) -> f64 {
    let k = gas.heat_capacity_ratio();
    (2.0 / (k + 1.0)).powf(k / (k - 1.0))
}

/// The stagnation pressure above which flow against `back_pressure`
/// chokes.
#[must_use]
pub fn choking_inlet_pressure(gas: &GasProperties, back_pressure: Pressure) -> Pressure {
    back_pressure / critical_pressure_ratio(gas)
}

/// Computes throat velocity and mass flow for a converging nozzle.
///
/// The choked and subsonic branches meet continuously at the critical
/// pressure ratio.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] if any input is not strictly
/// positive and finite, or if `back_pressure` exceeds the stagnation
/// pressure (which would reverse the flow).
pub fn flow(
    gas: &GasProperties,
    stagnation: StagnationConditions,
    back_pressure: Pressure,
    throat_area: Area,
) -> Result<NozzleFlow, ThermoError> {
    for (name, value) in [
        ("stagnation_pressure", stagnation.pressure.value),
        ("stagnation_temperature", stagnation.temperature.value),
        ("back_pressure", back_pressure.value),
        ("throat_area", throat_area.value),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ThermoError::non_positive(name, value));
        }
    }
    if back_pressure > stagnation.pressure {
        return Err(ThermoError::InvalidParameter {
            name: "back_pressure",
            value: back_pressure.value,
            requirement: "at most the stagnation pressure",
        });
    }

    let k = gas.heat_capacity_ratio();
    let r = gas.gas_constant().value;
    let p_t = stagnation.pressure.get::<pascal>();
    let t_t = stagnation.temperature.get::<kelvin>();
    let area = throat_area.value;
    let pressure_ratio = back_pressure.get::<pascal>() / p_t;

    let (regime, velocity, mass_flow) = if pressure_ratio <= critical_pressure_ratio(gas) {
        // Sonic throat: conditions there depend only on the reservoir.
        let t_star = t_t * 2.0 / (k + 1.0);
        let velocity = (k * r * t_star).sqrt();
        let mass_flow = area
            * p_t
            * (k / (r * t_t)).sqrt()
            * (2.0 / (k + 1.0)).powf((k + 1.0) / (2.0 * (k - 1.0)));
        (FlowRegime::Choked, velocity, mass_flow)
    } else {
        let expansion = 1.0 - pressure_ratio.powf((k - 1.0) / k);
        let velocity = (2.0 * k * r * t_t / (k - 1.0) * expansion).sqrt();
        let flow_function = pressure_ratio.powf(2.0 / k) - pressure_ratio.powf((k + 1.0) / k);
        let mass_flow = area * p_t * (2.0 * k / ((k - 1.0) * r * t_t) * flow_function).sqrt();
        (FlowRegime::Subsonic, velocity, mass_flow)
    };

    Ok(NozzleFlow {
        regime,
        throat_velocity: Velocity::new::<meter_per_second>(velocity),
        mass_flow: MassRate::new::<kilogram_per_second>(mass_flow),
    })
}
