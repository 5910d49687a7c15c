use thiserror::Error;

/// Errors that may occur when evaluating cycle thermodynamics.
///
/// Every fallible operation in this crate detects bad input at the point of
/// computation and returns immediately; nothing is clamped or retried.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThermoError {
    /// A parameter is outside the physical domain of the relation.
    ///
    /// Raised both for nonsensical direct input (a compression ratio of 1,
    /// a negative pressure) and for derived quantities that come out
    /// non-positive or non-finite.
    #[error("`{name}` must be {requirement}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// Both curve endpoints share the same specific volume, so there is no
    /// volume span to sample.
    #[error("curve endpoints coincide at {specific_volume} m³/kg")]
    DegenerateCurve { specific_volume: f64 },
}

impl ThermoError {
    /// Invalid-parameter error for a value that must be strictly positive.
    #[must_use]
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            name,
            value,
            requirement: "positive",
        }
    }
}
