//! Example: Configuration-driven bring-up.
//!
//! This example demonstrates how to:
//! - Parse motor wiring from TOML
//! - Register named ports in a PortTable
//! - Construct every configured motor in one call
//! - Address motors by name
//!
//! Run with: `cargo run --example config_driven --features std`

use stepper_pool::{
    config::PortTable, parse_config, Result, SimRegister, StepSize, StepperSystem,
};

const CONFIG: &str = r#"
[motors.pan]
speed = 12

[motors.pan.pins]
dir = { port = "B", bit = 0 }
enable = { port = "B", bit = 1 }
step = { port = "B", bit = 2 }
ms1 = { port = "C", bit = 0 }
ms2 = { port = "C", bit = 1 }
ms3 = { port = "C", bit = 2 }

[motors.tilt]
speed = 30

[motors.tilt.pins]
dir = { port = "B", bit = 4 }
enable = { port = "B", bit = 5 }
step = { port = "B", bit = 6 }
ms1 = { port = "C", bit = 4 }
ms2 = { port = "C", bit = 5 }
ms3 = { port = "C", bit = 6 }
"#;

fn main() -> Result<()> {
    println!("=== Configuration-Driven Example ===\n");

    let config = parse_config(CONFIG)?;
    println!("Configured motors:");
    for (name, motor) in config.iter() {
        println!("  {}: speed {}", name, motor.speed);
        for (line, cfg) in motor.pins.iter() {
            println!("    {:<6} -> {}{}", line, cfg.port, cfg.bit);
        }
    }

    // On hardware these would be `Reg8::from_addr` references.
    let (portb, ddrb) = (SimRegister::default(), SimRegister::default());
    let (portc, ddrc) = (SimRegister::default(), SimRegister::default());
    let ports = PortTable::new()
        .with("B", &portb, &ddrb)?
        .with("C", &portc, &ddrc)?;

    let mut system: StepperSystem<'_, SimRegister> = StepperSystem::from_config(&config, &ports)?;
    println!("\nBrought up {} motors", system.pool().active_count());

    let tilt = system.handle_or_error("tilt")?;
    system.pool_mut().set_step_size(tilt, StepSize::Sixteenth)?;
    system.pool_mut().set_position(tilt, 100)?;
    println!(
        "tilt: {:?}, target {}, portc={:08b}",
        system.pool().step_size(tilt)?,
        system.pool().desired_position(tilt)?.value(),
        portc.value()
    );

    if let Err(e) = system.handle_or_error("roll") {
        println!("Lookup failed: {}", e);
    }

    system.release("pan");
    println!("After release: {:?}", system.motor_names().collect::<Vec<_>>());

    println!("\n=== Example Complete ===");
    Ok(())
}
