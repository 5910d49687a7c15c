//! Valve-lift events on the four-stroke crank cycle.
//!
//! A valve event is a half-sine lobe: the valve leaves its seat at an
//! opening crank angle, follows `l = l_max·sin(π·θ/duration)` across the
//! event, and seats again. Crank angles live on the 720° four-stroke
//! cycle and wrap around it, so an event may straddle the 0°/720° mark.

use serde::{Deserialize, Serialize};
use uom::si::{
    angle::degree,
    f64::{Angle, Length},
    length::meter,
};

use aircycle_thermo::ThermoError;

/// Crank degrees in one four-stroke cycle (two crankshaft revolutions).
pub const CYCLE_DEGREES: f64 = 720.0;

/// One valve event: an opening angle, a duration, and a peak lift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValveEvent {
    opens: Angle,
    duration: Angle,
    max_lift: Length,
}

impl ValveEvent {
    /// Creates a valve event opening at `opens` and lasting `duration`
    /// crank degrees. Any opening angle is accepted and wrapped onto the
    /// cycle.
    ///
    /// # Errors
    ///
    /// Returns [`ThermoError::InvalidParameter`] unless
    /// `0 < duration < 720°` and `max_lift > 0`.
    pub fn new(opens: Angle, duration: Angle, max_lift: Length) -> Result<Self, ThermoError> {
        let opens_deg = opens.get::<degree>();
        if !opens_deg.is_finite() {
            return Err(ThermoError::InvalidParameter {
                name: "opens",
                value: opens_deg,
                requirement: "finite",
            });
        }

        let duration_deg = duration.get::<degree>();
        if !duration_deg.is_finite() || duration_deg <= 0.0 || duration_deg >= CYCLE_DEGREES {
            return Err(ThermoError::InvalidParameter {
                name: "duration",
                value: duration_deg,
                requirement: "between 0 and 720 degrees",
            });
        }

        if !max_lift.value.is_finite() || max_lift.value <= 0.0 {
            return Err(ThermoError::non_positive("max_lift", max_lift.value));
        }

        Ok(Self {
            opens,
            duration,
            max_lift,
        })
    }

    /// The crank angle at which the valve leaves its seat.
    #[must_use]
    pub fn opens(&self) -> Angle {
        self.opens
    }

    /// The crank-angle duration of the event.
    #[must_use]
    pub fn duration(&self) -> Angle {
        self.duration
    }

    /// The peak lift, reached at mid-event.
    #[must_use]
    pub fn max_lift(&self) -> Length {
        self.max_lift
    }

    /// The crank angle at which the valve seats again, wrapped onto the
    /// cycle.
    #[must_use]
    pub fn closes(&self) -> Angle {
        let closes = (self.opens.get::<degree>() + self.duration.get::<degree>())
            .rem_euclid(CYCLE_DEGREES);
        Angle::new::<degree>(closes)
    }

    /// Crank degrees into the event, if `crank_angle` falls within it.
    ///
    /// The event interval is half-open: the instant the valve seats again
    /// belongs to the closed phase.
    fn offset_into_event(&self, crank_angle: Angle) -> Option<f64> {
        let offset = (crank_angle.get::<degree>() - self.opens.get::<degree>())
            .rem_euclid(CYCLE_DEGREES);
        (offset < self.duration.get::<degree>()).then_some(offset)
    }

    /// Whether the valve is off its seat at `crank_angle`.
    #[must_use]
    pub fn is_open(&self, crank_angle: Angle) -> bool {
        self.offset_into_event(crank_angle).is_some()
    }

    /// Valve lift at `crank_angle`; zero whenever the valve is seated.
    #[must_use]
    pub fn lift_at(&self, crank_angle: Angle) -> Length {
        match self.offset_into_event(crank_angle) {
            Some(offset) => {
                let phase = std::f64::consts::PI * offset / self.duration.get::<degree>();
                self.max_lift * phase.sin()
            }
            None => Length::new::<meter>(0.0),
        }
    }
}

/// Total crank angle over which both events are open.
///
/// For an intake event opening just before the gas-exchange top dead
/// center and an exhaust event closing just after it, this is the classic
/// valve-overlap figure.
#[must_use]
pub fn overlap(a: &ValveEvent, b: &ValveEvent) -> Angle {
    let a_start = a.opens.get::<degree>().rem_euclid(CYCLE_DEGREES);
    let a_end = a_start + a.duration.get::<degree>();
    let b_start = b.opens.get::<degree>().rem_euclid(CYCLE_DEGREES);
    let b_duration = b.duration.get::<degree>();

    // Intersect on the unwrapped line; shifting one window a full cycle
    // each way covers wrap-around.
    let mut total = 0.0;
    for shift in [-CYCLE_DEGREES, 0.0, CYCLE_DEGREES] {
        let start = (b_start + shift).max(a_start);
        let end = (b_start + shift + b_duration).min(a_end);
        total += (end - start).max(0.0);
    }

    Angle::new::<degree>(total)
}
