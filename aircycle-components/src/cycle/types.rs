use serde::{Deserialize, Serialize};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, Ratio, SpecificVolume, ThermodynamicTemperature},
    pressure::kilopascal,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use aircycle_thermo::{
    GasProperties, State, ThermoError,
    curve::IsentropicCurve,
    process::Process,
    units::{SpecificEnergy, TemperatureOps},
};

/// Peak temperature applied to Dual-cycle heat addition unless a caller
/// overrides it, in kelvin.
///
/// This is a design limit on the materials side, not a gas property; the
/// constant-pressure leg is cut short once the gas reaches it.
pub const DEFAULT_TEMPERATURE_CAP_KELVIN: f64 = 2500.0;

/// The reference condition a cycle starts from (state 1, intake).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

impl Reference {
    /// Creates a reference condition from pressure and temperature.
    #[must_use]
    pub fn new(pressure: Pressure, temperature: ThermodynamicTemperature) -> Self {
        Self {
            pressure,
            temperature,
        }
    }
}

impl Default for Reference {
    /// Standard intake air: 100 kPa and 300 K.
    fn default() -> Self {
        Self {
            pressure: Pressure::new::<kilopascal>(100.0),
            temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        }
    }
}

/// Parameters selecting and sizing an air-standard cycle.
///
/// Ratios are dimensionless and must describe a real machine: every cycle
/// needs `compression_ratio > 1`, and the per-cycle fields carry their own
/// requirements documented on each variant. Violations surface as
/// [`ThermoError::InvalidParameter`] from [`solve`](crate::cycle::solve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CycleParameters {
    /// Constant-volume heat addition of `heat_input` (spark ignition).
    Otto {
        compression_ratio: f64,
        heat_input: SpecificEnergy,
    },

    /// Constant-pressure heat addition of `heat_input` (compression
    /// ignition).
    Diesel {
        compression_ratio: f64,
        heat_input: SpecificEnergy,
    },

    /// Split heat addition: constant volume up to `pressure_ratio` times
    /// the compression pressure, then constant pressure while the volume
    /// grows by the cutoff coefficient.
    ///
    /// `cutoff_growth` is the volume growth of the constant-pressure leg;
    /// `None` uses the empirical `1 + 0.05·(rc − 1)` of the reference
    /// study, a modeling assumption rather than a physical relation.
    /// `temperature_cap` cuts the constant-pressure leg short at a peak
    /// temperature; `None` leaves it unbounded. [`CycleParameters::dual`]
    /// fills both defaults.
    Dual {
        compression_ratio: f64,
        pressure_ratio: f64,
        cutoff_growth: Option<f64>,
        temperature_cap: Option<ThermodynamicTemperature>,
    },

    /// Over-expanded cycle: constant-volume heat addition sized so the
    /// expansion through `expansion_ratio > compression_ratio` lands back
    /// on the reference isobar, where heat is rejected at constant
    /// pressure.
    Atkinson {
        compression_ratio: f64,
        expansion_ratio: f64,
    },
}

impl CycleParameters {
    /// Dual-cycle parameters with the default cutoff model and the
    /// [`DEFAULT_TEMPERATURE_CAP_KELVIN`] peak-temperature cap.
    #[must_use]
    pub fn dual(compression_ratio: f64, pressure_ratio: f64) -> Self {
        Self::Dual {
            compression_ratio,
            pressure_ratio,
            cutoff_growth: None,
            temperature_cap: Some(ThermodynamicTemperature::new::<kelvin>(
                DEFAULT_TEMPERATURE_CAP_KELVIN,
            )),
        }
    }
}

/// One leg of a solved cycle: the process and its endpoint states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub process: Process,
    pub from: &'a State,
    pub to: &'a State,
}

/// A solved air-standard cycle.
///
/// Holds the state points in cycle order and the process connecting each
/// state to the next; the last process closes the loop back to state 1.
/// Performance figures are derived on demand from the states, so they
/// always agree with them.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedCycle {
    gas: GasProperties,
    states: Vec<State>,
    processes: Vec<Process>,
}

impl SolvedCycle {
    pub(crate) fn new(gas: GasProperties, states: Vec<State>, processes: Vec<Process>) -> Self {
        debug_assert_eq!(states.len(), processes.len());

        Self {
            gas,
            states,
            processes,
        }
    }

    /// The gas the cycle was solved for.
    #[must_use]
    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    /// The state points in cycle order, starting from the reference state.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The process labels, one per leg; leg `i` joins state `i` to state
    /// `i + 1`, and the last leg joins back to state 0.
    #[must_use]
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates over the legs of the cycle with their endpoint states.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> {
        self.processes.iter().enumerate().map(|(i, &process)| Leg {
            process,
            from: &self.states[i],
            to: &self.states[(i + 1) % self.states.len()],
        })
    }

    /// Specific heat transferred along one leg, signed positive into the
    /// gas: `cv·ΔT` at constant volume, `cp·ΔT` at constant pressure, and
    /// zero along isentropes.
    #[must_use]
    pub fn leg_heat(&self, leg: &Leg<'_>) -> SpecificEnergy {
        let dt = leg.to.temperature.minus(leg.from.temperature);
        match leg.process {
            Process::IsentropicCompression | Process::IsentropicExpansion => {
                SpecificEnergy::new::<joule_per_kilogram>(0.0)
            }
            Process::IsochoricHeatAddition | Process::IsochoricHeatRejection => self.gas.cv() * dt,
            Process::IsobaricHeatAddition | Process::IsobaricHeatRejection => self.gas.cp() * dt,
        }
    }

    /// Total specific heat added over the cycle's heat-addition legs.
    #[must_use]
    pub fn heat_input(&self) -> SpecificEnergy {
        self.legs()
            .filter(|leg| leg.process.is_heat_addition())
            .fold(SpecificEnergy::new::<joule_per_kilogram>(0.0), |acc, leg| {
                acc + self.leg_heat(&leg)
            })
    }

    /// Total specific heat rejected over the cycle's rejection legs,
    /// reported as a positive magnitude.
    #[must_use]
    pub fn heat_rejection(&self) -> SpecificEnergy {
        -self
            .legs()
            .filter(|leg| leg.process.is_heat_rejection())
            .fold(SpecificEnergy::new::<joule_per_kilogram>(0.0), |acc, leg| {
                acc + self.leg_heat(&leg)
            })
    }

    /// Net specific work of the cycle, `q_in − q_out` by the first law
    /// around the closed loop.
    #[must_use]
    pub fn net_work(&self) -> SpecificEnergy {
        self.heat_input() - self.heat_rejection()
    }

    /// Thermal efficiency, `w_net / q_in`.
    #[must_use]
    pub fn thermal_efficiency(&self) -> Ratio {
        self.net_work() / self.heat_input()
    }

    /// Mean effective pressure: net work per unit of displaced specific
    /// volume, `w_net / (v_max − v_min)`.
    #[must_use]
    pub fn mean_effective_pressure(&self) -> Pressure {
        let (v_min, v_max) = self
            .states
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.specific_volume.value), hi.max(s.specific_volume.value))
            });

        self.net_work() / SpecificVolume::new::<cubic_meter_per_kilogram>(v_max - v_min)
    }

    /// Samples the isentrope of one leg at a chosen sample count.
    ///
    /// Returns `None` for straight legs (constant volume or constant
    /// pressure), which are fully described by their endpoint states,
    /// and for a `leg_index` past the last leg.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] if `samples < 2`.
    pub fn leg_curve(
        &self,
        leg_index: usize,
        samples: usize,
    ) -> Result<Option<IsentropicCurve>, ThermoError> {
        let Some(leg) = self.legs().nth(leg_index) else {
            return Ok(None);
        };
        if !leg.process.is_isentropic() {
            return Ok(None);
        }

        IsentropicCurve::between(self.gas.heat_capacity_ratio(), leg.from, leg.to)?
            .with_samples(samples)
            .map(Some)
    }

    /// Isentropic curves for the cycle's adiabatic legs, keyed by leg
    /// index.
    ///
    /// Straight legs (constant volume or constant pressure) are fully
    /// described by their endpoint states and are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError`] if a curve cannot be built, which for a
    /// solver-produced cycle indicates corrupted states.
    pub fn isentropic_curves(&self) -> Result<Vec<(usize, IsentropicCurve)>, ThermoError> {
        self.legs()
            .enumerate()
            .filter(|(_, leg)| leg.process.is_isentropic())
            .map(|(i, leg)| {
                IsentropicCurve::between(self.gas.heat_capacity_ratio(), leg.from, leg.to)
                    .map(|curve| (i, curve))
            })
            .collect()
    }
}
