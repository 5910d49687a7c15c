//! Isentrope sampling between two states.
//!
//! A solved cycle connects its states with straight legs (constant volume,
//! constant pressure) and isentropic legs. The straight legs are fully
//! described by their endpoints; the isentropic legs need intermediate
//! samples of `P·v^k = C` before anything downstream can draw or integrate
//! them. [`IsentropicCurve`] produces those samples.

use uom::si::{
    f64::{Pressure, SpecificVolume},
    pressure::pascal,
    specific_volume::cubic_meter_per_kilogram,
};

use crate::{State, ThermoError};

/// Number of samples a curve yields unless overridden.
pub const DEFAULT_SAMPLES: usize = 100;

/// A pressure–volume sample along an isentrope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvPoint {
    pub specific_volume: SpecificVolume,
    pub pressure: Pressure,
}

/// A sampled isentrope `P·v^k = C` between two endpoint states.
///
/// Samples are evenly spaced in specific volume over
/// `[min(v_start, v_end), max(v_start, v_end)]`, both endpoints included,
/// with pressure evaluated from the curve constant. The constant is fixed
/// by the `start` endpoint; endpoints produced by the cycle solver fix the
/// same constant to within floating-point error, so the curve passes
/// through both.
///
/// The curve itself is cheap plain data. Sampling is lazy: [`points`]
/// returns a fresh iterator each call, so one curve can be walked any
/// number of times.
///
/// [`points`]: IsentropicCurve::points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsentropicCurve {
    heat_capacity_ratio: f64,
    /// `P·v^k` in SI units, Pa·(m³/kg)^k.
    constant: f64,
    /// Volume span in m³/kg, `v_min < v_max`.
    v_min: f64,
    v_max: f64,
    samples: usize,
}

impl IsentropicCurve {
    /// Creates the isentrope through `start` spanning the volumes of the
    /// two endpoint states, sampled at [`DEFAULT_SAMPLES`] points.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::DegenerateCurve`] if the endpoints share the
    /// same specific volume, or [`ThermoError::InvalidParameter`] if
    /// `heat_capacity_ratio` is not strictly positive and finite.
    pub fn between(
        heat_capacity_ratio: f64,
        start: &State,
        end: &State,
    ) -> Result<Self, ThermoError> {
        if !heat_capacity_ratio.is_finite() || heat_capacity_ratio <= 0.0 {
            return Err(ThermoError::non_positive(
                "heat_capacity_ratio",
                heat_capacity_ratio,
            ));
        }

        let v_start = start.specific_volume.get::<cubic_meter_per_kilogram>();
        let v_end = end.specific_volume.get::<cubic_meter_per_kilogram>();
        if v_start == v_end {
            return Err(ThermoError::DegenerateCurve {
                specific_volume: v_start,
            });
        }

        Ok(Self {
            heat_capacity_ratio,
            constant: start.pressure.get::<pascal>() * v_start.powf(heat_capacity_ratio),
            v_min: v_start.min(v_end),
            v_max: v_start.max(v_end),
            samples: DEFAULT_SAMPLES,
        })
    }

    /// Returns the curve with a different sample count.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] if `samples < 2`; both
    /// endpoints are always part of the sequence.
    pub fn with_samples(self, samples: usize) -> Result<Self, ThermoError> {
        if samples < 2 {
            return Err(ThermoError::InvalidParameter {
                name: "samples",
                value: samples as f64,
                requirement: "at least 2",
            });
        }

        Ok(Self { samples, ..self })
    }

    /// The number of samples the curve yields.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Lazily yields the samples from the smallest volume to the largest.
    #[must_use]
    pub fn points(&self) -> Points {
        Points {
            curve: *self,
            index: 0,
        }
    }

    fn point_at(&self, index: usize) -> PvPoint {
        let span = self.v_max - self.v_min;
        let fraction = index as f64 / (self.samples - 1) as f64;

        // The last sample must land on v_max itself, not one rounding
        // step away from it.
        let v = if index + 1 == self.samples {
            self.v_max
        } else {
            self.v_min + span * fraction
        };

        PvPoint {
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(v),
            pressure: Pressure::new::<pascal>(self.constant / v.powf(self.heat_capacity_ratio)),
        }
    }
}

impl IntoIterator for &IsentropicCurve {
    type Item = PvPoint;
    type IntoIter = Points;

    fn into_iter(self) -> Points {
        self.points()
    }
}

/// Iterator over the samples of an [`IsentropicCurve`].
#[derive(Debug, Clone)]
pub struct Points {
    curve: IsentropicCurve,
    index: usize,
}

impl Iterator for Points {
    type Item = PvPoint;

    fn next(&mut self) -> Option<PvPoint> {
        if self.index >= self.curve.samples {
            return None;
        }

        let point = self.curve.point_at(self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.curve.samples - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points {}
