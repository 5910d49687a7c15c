//! Engine-analysis components built on `aircycle-thermo`.
//!
//! The [`cycle`] module solves the classic air-standard cycles (Otto,
//! Diesel, Dual, Atkinson) in closed form and reports their performance.
//! [`nozzle`] models choked and subsonic flow through a converging nozzle,
//! and [`valvetrain`] describes valve-lift events on the four-stroke crank
//! cycle.

pub mod cycle;
pub mod nozzle;
pub mod valvetrain;
