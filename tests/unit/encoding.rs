//! Property tests for pin encoding and handle checks.

use proptest::prelude::*;

use stepper_pool::error::{MotorError, PoolError};
use stepper_pool::{
    Direction, Error, PinBinding, PinSet, Position, SimRegister, StepSize, StepperAttr,
    StepperPool, MAX_POSITION,
};

fn step_size() -> impl Strategy<Value = StepSize> {
    prop::sample::select(StepSize::ALL.to_vec())
}

/// Six distinct bits on one port, in line order.
fn layout() -> impl Strategy<Value = Vec<u8>> {
    Just((0u8..8).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|bits| bits[..6].to_vec())
}

fn attr<'r>(port: &'r SimRegister, ddr: &'r SimRegister, bits: &[u8]) -> StepperAttr<'r, SimRegister> {
    let pin = |i: usize| PinBinding::new(port, ddr, 1 << bits[i]);
    StepperAttr::new(
        PinSet {
            dir: pin(0),
            enable: pin(1),
            step: pin(2),
            ms1: pin(3),
            ms2: pin(4),
            ms3: pin(5),
        },
        0,
    )
}

proptest! {
    /// The MS lines end up encoding the last step size, whatever came before.
    #[test]
    fn ms_lines_follow_last_step_size(
        bits in layout(),
        sizes in prop::collection::vec(step_size(), 1..12),
        initial in any::<u8>(),
    ) {
        let (port, ddr) = (SimRegister::new(initial), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();
        let h = pool.construct(attr(&port, &ddr, &bits)).unwrap();

        for size in &sizes {
            pool.set_step_size(h, *size).unwrap();
        }

        let last = *sizes.last().unwrap();
        let levels = [port.bit(bits[3]), port.bit(bits[4]), port.bit(bits[5])];
        prop_assert_eq!(levels, last.ms_levels());
        prop_assert_eq!(pool.step_size(h).unwrap(), last);
    }

    /// Bits outside the stepper's lines survive construction and control.
    #[test]
    fn foreign_bits_untouched(
        bits in layout(),
        initial in any::<u8>(),
        size in step_size(),
        backward in any::<bool>(),
    ) {
        let (port, ddr) = (SimRegister::new(initial), SimRegister::default());
        let ours: u8 = bits.iter().fold(0, |m, b| m | (1 << b));
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();
        let h = pool.construct(attr(&port, &ddr, &bits)).unwrap();

        pool.set_step_size(h, size).unwrap();
        let dir = if backward { Direction::Backward } else { Direction::Forward };
        pool.set_direction(h, dir).unwrap();
        pool.step_engage(h).unwrap();

        prop_assert_eq!(port.value() & !ours, initial & !ours);
        prop_assert_eq!(ddr.value(), ours);
        prop_assert_eq!(port.bit(bits[0]), backward);
    }

    /// Every value in range is accepted and read back unchanged.
    #[test]
    fn position_in_range_accepted(pos in 0..=MAX_POSITION) {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();
        let h = pool.construct(attr(&port, &ddr, &[0, 1, 2, 3, 4, 5])).unwrap();

        pool.set_position(h, pos).unwrap();
        prop_assert_eq!(pool.desired_position(h).unwrap(), Position::new(pos).unwrap());
        prop_assert_eq!(u8::from(pool.desired_position(h).unwrap()), pos);
    }

    /// Every value out of range is rejected and the old target kept.
    #[test]
    fn position_out_of_range_rejected(prev in 0..=MAX_POSITION, pos in (MAX_POSITION + 1)..=u8::MAX) {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();
        let h = pool.construct(attr(&port, &ddr, &[0, 1, 2, 3, 4, 5])).unwrap();
        pool.set_position(h, prev).unwrap();

        prop_assert_eq!(
            pool.set_position(h, pos),
            Err(Error::Motor(MotorError::PositionInvalid(pos)))
        );
        prop_assert_eq!(pool.desired_position(h).unwrap().value(), prev);
    }

    /// No sequence of construct and destruct lets a released handle through.
    #[test]
    fn released_handles_stay_invalid(ops in prop::collection::vec(any::<bool>(), 1..40)) {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();
        let mut live = Vec::new();
        let mut dead = Vec::new();

        for construct in ops {
            if construct {
                match pool.construct(attr(&port, &ddr, &[0, 1, 2, 3, 4, 5])) {
                    Ok(h) => live.push(h),
                    Err(e) => {
                        prop_assert_eq!(live.len(), pool.capacity());
                        prop_assert_eq!(e, Error::Pool(PoolError::Exhausted { capacity: 2 }));
                    }
                }
            } else if let Some(h) = live.pop() {
                pool.destruct(h);
                dead.push(h);
            }

            prop_assert_eq!(pool.active_count(), live.len());
            for h in &live {
                prop_assert!(pool.speed(*h).is_ok());
            }
            for h in &dead {
                prop_assert_eq!(pool.speed(*h), Err(Error::Pool(PoolError::HandleInvalid(*h))));
            }
        }
    }
}

#[test]
fn divisor_round_trip() {
    for size in StepSize::ALL {
        assert_eq!(StepSize::from_divisor(size.divisor()), Some(size));
        assert_eq!(StepSize::try_from(size.divisor()), Ok(size));
    }
    assert!(StepSize::try_from(3).is_err());
}
