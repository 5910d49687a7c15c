//! Ideal-gas thermodynamics for air-standard cycle analysis.
//!
//! Provides the working-gas model ([`GasProperties`]), state points
//! ([`State`]), the closed-form process relations connecting them
//! ([`process`]), and isentrope sampling for downstream charting
//! ([`curve`]). Cycle assembly lives in the `aircycle-components` crate.

mod error;
mod gas;
mod state;

pub mod curve;
pub mod process;
pub mod units;

pub use error::ThermoError;
pub use gas::GasProperties;
pub use state::State;
