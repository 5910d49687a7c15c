//! Air-standard cycle solvers.
//!
//! Every cycle starts from a caller-supplied reference state (state 1,
//! intake) and is solved in closed form from its defining ratios; nothing
//! iterates. The solved cycle carries its state points and process labels
//! and derives performance figures from them on demand.
//!
//! # Example
//!
//! ```
//! use aircycle_components::cycle::{self, CycleParameters, Reference};
//! use aircycle_thermo::{GasProperties, units::SpecificEnergy};
//! use uom::si::available_energy::kilojoule_per_kilogram;
//!
//! let air = GasProperties::air();
//! let parameters = CycleParameters::Otto {
//!     compression_ratio: 14.0,
//!     heat_input: SpecificEnergy::new::<kilojoule_per_kilogram>(1390.72),
//! };
//!
//! let solved = cycle::solve(&air, &parameters, Reference::default())?;
//! assert_eq!(solved.states().len(), 4);
//! # Ok::<(), aircycle_thermo::ThermoError>(())
//! ```

use aircycle_thermo::{GasProperties, State, ThermoError};

mod atkinson;
mod diesel;
mod dual;
mod otto;
mod types;

pub use types::{CycleParameters, DEFAULT_TEMPERATURE_CAP_KELVIN, Leg, Reference, SolvedCycle};

/// Solves an air-standard cycle from its parameters and reference state.
///
/// # Errors
///
/// Returns [`ThermoError::InvalidParameter`] for a non-physical reference
/// state, ratios that do not describe a real machine (`rc ≤ 1`,
/// `re ≤ rc`, `rp ≤ 1`, a cutoff or heat input that adds no heat), or
/// any derived state property that comes out non-positive.
pub fn solve(
    gas: &GasProperties,
    parameters: &CycleParameters,
    reference: Reference,
) -> Result<SolvedCycle, ThermoError> {
    let state_1 =
        State::from_pressure_temperature(gas, reference.pressure, reference.temperature)?;

    match *parameters {
        CycleParameters::Otto {
            compression_ratio,
            heat_input,
        } => otto::solve(gas, &state_1, compression_ratio, heat_input),
        CycleParameters::Diesel {
            compression_ratio,
            heat_input,
        } => diesel::solve(gas, &state_1, compression_ratio, heat_input),
        CycleParameters::Dual {
            compression_ratio,
            pressure_ratio,
            cutoff_growth,
            temperature_cap,
        } => dual::solve(
            gas,
            &state_1,
            compression_ratio,
            pressure_ratio,
            cutoff_growth,
            temperature_cap,
        ),
        CycleParameters::Atkinson {
            compression_ratio,
            expansion_ratio,
        } => atkinson::solve(gas, &state_1, compression_ratio, expansion_ratio),
    }
}
