use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::{ThermoError, units::SpecificGasConstant};

/// Properties of an ideal gas with constant specific heats.
///
/// A gas is fully described by its heat capacity ratio `k = cp / cv` and its
/// specific gas constant `R`; the specific heats follow from the pair as
/// `cp = k·R / (k − 1)` and `cv = R / (k − 1)`.
///
/// Storing one consistent `(k, R)` pair keeps the derived heats and the
/// isentropic exponents in agreement, which matters when a cycle's energy
/// balance is checked against its state points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    heat_capacity_ratio: f64,
    gas_constant: SpecificGasConstant,
}

impl GasProperties {
    /// Creates gas properties from a heat capacity ratio and gas constant.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] unless `k > 1` and `R > 0`,
    /// both finite.
    pub fn new(
        heat_capacity_ratio: f64,
        gas_constant: SpecificGasConstant,
    ) -> Result<Self, ThermoError> {
        if !heat_capacity_ratio.is_finite() || heat_capacity_ratio <= 1.0 {
            return Err(ThermoError::InvalidParameter {
                name: "heat_capacity_ratio",
                value: heat_capacity_ratio,
                requirement: "finite and greater than 1",
            });
        }
        if !gas_constant.value.is_finite() || gas_constant.value <= 0.0 {
            return Err(ThermoError::non_positive("gas_constant", gas_constant.value));
        }

        Ok(Self {
            heat_capacity_ratio,
            gas_constant,
        })
    }

    /// Creates gas properties from the two specific heats.
    ///
    /// Derives `k = cp / cv` and `R = cp − cv`, so callers who start from
    /// tabulated heats get exponents consistent with them.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] unless `cp > cv > 0`.
    pub fn from_specific_heats(
        cp: SpecificHeatCapacity,
        cv: SpecificHeatCapacity,
    ) -> Result<Self, ThermoError> {
        if !cv.value.is_finite() || cv.value <= 0.0 {
            return Err(ThermoError::non_positive("cv", cv.value));
        }
        if !cp.value.is_finite() || cp.value <= cv.value {
            return Err(ThermoError::InvalidParameter {
                name: "cp",
                value: cp.value,
                requirement: "finite and greater than cv",
            });
        }

        Ok(Self {
            heat_capacity_ratio: cp.value / cv.value,
            gas_constant: cp - cv,
        })
    }

    /// Dry air as an ideal gas: `k = 1.4`, `R = 287 J/kg·K`.
    #[must_use]
    pub fn air() -> Self {
        Self {
            heat_capacity_ratio: 1.4,
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
        }
    }

    /// The heat capacity ratio `k = cp / cv`.
    #[must_use]
    pub fn heat_capacity_ratio(&self) -> f64 {
        self.heat_capacity_ratio
    }

    /// The specific gas constant `R`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }

    /// Specific heat at constant pressure, `cp = k·R / (k − 1)`.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.gas_constant * (self.heat_capacity_ratio / (self.heat_capacity_ratio - 1.0))
    }

    /// Specific heat at constant volume, `cv = R / (k − 1)`.
    #[must_use]
    pub fn cv(&self) -> SpecificHeatCapacity {
        self.gas_constant / (self.heat_capacity_ratio - 1.0)
    }
}
