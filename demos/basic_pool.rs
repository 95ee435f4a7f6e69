//! Example: Driving two steppers from one pool.
//!
//! This example demonstrates how to:
//! - Bind DIR/ENABLE/STEP/MS lines to register bits
//! - Construct steppers until the pool is full
//! - Change step size, direction and target position
//! - Release a stepper and reuse its slot
//!
//! Run with: `cargo run --example basic_pool`

use embedded_hal::digital::OutputPin;
use stepper_pool::{
    Direction, Error, PinBinding, Result, SimRegister, StepSize, StepperAttr, StepperPool,
};

/// Bind socket `n` of a two-socket driver board.
fn socket<'r>(
    ctrl: &'r SimRegister,
    ctrl_ddr: &'r SimRegister,
    ms: &'r SimRegister,
    ms_ddr: &'r SimRegister,
    n: u8,
    speed: u8,
) -> Result<StepperAttr<'r, SimRegister>> {
    let base = n * 4;
    StepperAttr::builder()
        .dir_pin(PinBinding::new(ctrl, ctrl_ddr, 1 << base))
        .enable_pin(PinBinding::new(ctrl, ctrl_ddr, 1 << (base + 1)))
        .step_pin(PinBinding::new(ctrl, ctrl_ddr, 1 << (base + 2)))
        .ms1_pin(PinBinding::new(ms, ms_ddr, 1 << base))
        .ms2_pin(PinBinding::new(ms, ms_ddr, 1 << (base + 1)))
        .ms3_pin(PinBinding::new(ms, ms_ddr, 1 << (base + 2)))
        .speed(speed)
        .build()
}

fn main() -> Result<()> {
    println!("=== Stepper Pool Example ===\n");

    let (ctrl, ctrl_ddr) = (SimRegister::default(), SimRegister::default());
    let (ms, ms_ddr) = (SimRegister::default(), SimRegister::default());
    let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();

    let pan = pool.construct(socket(&ctrl, &ctrl_ddr, &ms, &ms_ddr, 0, 5)?)?;
    let tilt = pool.construct(socket(&ctrl, &ctrl_ddr, &ms, &ms_ddr, 1, 8)?)?;
    println!("Constructed pan {} and tilt {}", pan, tilt);
    println!("  DDR  ctrl={:08b} ms={:08b}", ctrl_ddr.value(), ms_ddr.value());

    match pool.construct(socket(&ctrl, &ctrl_ddr, &ms, &ms_ddr, 0, 1)?) {
        Err(Error::Pool(e)) => println!("Third construct refused: {}", e),
        other => println!("Unexpected: {:?}", other.map(|h| h.to_string())),
    }

    println!("\n--- Control ---");
    pool.set_step_size(pan, StepSize::Eighth)?;
    pool.set_direction(tilt, Direction::Backward)?;
    pool.set_position(tilt, 150)?;
    println!(
        "pan:  {:?} (1/{}), ms={:08b}",
        pool.step_size(pan)?,
        pool.step_size(pan)?.divisor(),
        ms.value()
    );
    println!(
        "tilt: {:?}, target {} ({:.1} deg), ctrl={:08b}",
        pool.direction(tilt)?,
        pool.desired_position(tilt)?.value(),
        pool.desired_position(tilt)?.degrees(),
        ctrl.value()
    );

    if let Err(e) = pool.set_position(tilt, 200) {
        println!("Rejected: {}", e);
    }

    println!("\n--- Step pulse ---");
    pool.step_engage(pan)?;
    println!("STEP high: ctrl={:08b}", ctrl.value());
    let mut step = pool.pins(pan)?.step;
    let _ = step.set_low();
    println!("STEP low:  ctrl={:08b}", ctrl.value());

    println!("\n--- Release ---");
    pool.destruct(tilt);
    println!("tilt released, active = {}", pool.active_count());
    if let Err(e) = pool.speed(tilt) {
        println!("Old handle: {}", e);
    }
    let again = pool.construct(socket(&ctrl, &ctrl_ddr, &ms, &ms_ddr, 1, 2)?)?;
    println!("Slot reused as {}", again);

    println!("\n=== Example Complete ===");
    Ok(())
}
