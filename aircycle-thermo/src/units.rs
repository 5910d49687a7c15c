//! Quantity aliases and unit helpers used throughout the crate.

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific energy, J/kg in SI.
///
/// Used for specific heat transfer and specific work around a cycle.
pub type SpecificEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Extension method for `ThermodynamicTemperature` to compute a temperature difference.
pub trait TemperatureOps {
    /// Computes the difference between two temperature values.
    ///
    /// A `TemperatureInterval` (a temperature change) is distinct from a
    /// `ThermodynamicTemperature` (a specific temperature value), and `uom`
    /// does not allow subtracting two absolute temperatures directly.
    /// See [uom#380](https://github.com/iliekturtles/uom/issues/380) for
    /// background on this distinction.
    ///
    /// Inputs may use any supported temperature units, with values internally
    /// converted to kelvin for calculation.
    ///
    /// # Returns
    ///
    /// A `TemperatureInterval` representing the difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
