//! # Air-Standard Cycle Comparison
//!
//! Solves the Dual cycle of the reference engine study (compression ratio 14,
//! constant-volume pressure ratio 1.7), then feeds the same heat input to
//! Otto and Diesel cycles at the same compression ratio. An Atkinson variant
//! with a longer expansion stroke rounds out the table.
//!
//! Each cycle is printed as its state points followed by its performance
//! figures, so the effect of where the heat goes in (constant volume,
//! constant pressure, or split) is easy to read off.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example compare_cycles
//! ```

use aircycle_components::cycle::{CycleParameters, Reference, SolvedCycle, solve};
use aircycle_thermo::GasProperties;
use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::kilopascal, ratio::percent,
    specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
};

fn print_cycle(name: &str, cycle: &SolvedCycle) {
    println!("\n{name}");
    println!(
        "{:>5} {:>12} {:>12} {:>10}",
        "state", "P [kPa]", "v [m³/kg]", "T [K]"
    );
    for (i, state) in cycle.states().iter().enumerate() {
        println!(
            "{:>5} {:>12.2} {:>12.5} {:>10.2}",
            i + 1,
            state.pressure.get::<kilopascal>(),
            state.specific_volume.get::<cubic_meter_per_kilogram>(),
            state.temperature.get::<kelvin>(),
        );
    }
    println!(
        "q_in = {:.2} kJ/kg   w_net = {:.2} kJ/kg   eta = {:.2} %   mep = {:.1} kPa",
        cycle.heat_input().get::<kilojoule_per_kilogram>(),
        cycle.net_work().get::<kilojoule_per_kilogram>(),
        cycle.thermal_efficiency().get::<percent>(),
        cycle.mean_effective_pressure().get::<kilopascal>(),
    );
}

fn main() {
    let air = GasProperties::air();
    let reference = Reference::default();

    // Solve the dual cycle first; its heat input sizes the Otto and Diesel
    // runs so all three burn the same energy per kilogram of air.
    let dual = solve(&air, &CycleParameters::dual(14.0, 1.7), reference).unwrap();
    let heat_input = dual.heat_input();

    let otto = solve(
        &air,
        &CycleParameters::Otto {
            compression_ratio: 14.0,
            heat_input,
        },
        reference,
    )
    .unwrap();
    let diesel = solve(
        &air,
        &CycleParameters::Diesel {
            compression_ratio: 14.0,
            heat_input,
        },
        reference,
    )
    .unwrap();
    let atkinson = solve(
        &air,
        &CycleParameters::Atkinson {
            compression_ratio: 14.0,
            expansion_ratio: 17.0,
        },
        reference,
    )
    .unwrap();

    print_cycle("Otto", &otto);
    print_cycle("Diesel", &diesel);
    print_cycle("Dual", &dual);
    print_cycle("Atkinson", &atkinson);
}
