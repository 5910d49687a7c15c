//! # Converging Nozzle Sweep
//!
//! Sweeps the stagnation pressure feeding a converging nozzle that exhausts
//! to a fixed 100 kPa back pressure, printing throat velocity and mass flow
//! as the flow transitions from subsonic to choked. Past the choking inlet
//! pressure the velocity freezes at the speed of sound and the mass flow
//! grows only because the inlet density does.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example nozzle_sweep
//! ```

use aircycle_components::nozzle::{self, FlowRegime, StagnationConditions};
use aircycle_thermo::GasProperties;
use uom::si::{
    area::square_centimeter,
    f64::{Area, Pressure, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    pressure::kilopascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

fn main() {
    let air = GasProperties::air();
    let back_pressure = Pressure::new::<kilopascal>(100.0);
    let throat_area = Area::new::<square_centimeter>(10.0);

    println!(
        "critical pressure ratio:  {:.4}",
        nozzle::critical_pressure_ratio(&air)
    );
    println!(
        "choking inlet pressure:   {:.2} kPa",
        nozzle::choking_inlet_pressure(&air, back_pressure).get::<kilopascal>()
    );

    println!(
        "\n{:>10} {:>10} {:>10} {:>13}",
        "Pt [kPa]", "regime", "V [m/s]", "mdot [kg/s]"
    );
    for inlet in [
        105.0, 120.0, 140.0, 160.0, 180.0, 189.29, 200.0, 250.0, 300.0,
    ] {
        let stagnation = StagnationConditions {
            pressure: Pressure::new::<kilopascal>(inlet),
            temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
        };
        let flow = nozzle::flow(&air, stagnation, back_pressure, throat_area).unwrap();

        let regime = match flow.regime {
            FlowRegime::Subsonic => "subsonic",
            FlowRegime::Choked => "choked",
        };
        println!(
            "{:>10.2} {:>10} {:>10.2} {:>13.5}",
            inlet,
            regime,
            flow.throat_velocity.get::<meter_per_second>(),
            flow.mass_flow.get::<kilogram_per_second>(),
        );
    }
}
