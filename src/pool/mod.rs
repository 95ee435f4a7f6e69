//! Fixed-capacity stepper pool.
//!
//! Slots are handed out lowest index first. A slot is vacant, holds one
//! active stepper, or is retired after its generation counter ran out.

mod handle;
mod system;

pub use handle::Handle;
pub use system::{StepperSystem, MAX_NAMED_MOTORS};

use crate::error::{PoolError, Result};
use crate::hw::Register;
use crate::motor::{Stepper, StepperAttr};

/// Default pool capacity.
pub const MAX_STEPPERS: usize = 2;

struct Slot<'r, R: ?Sized> {
    generation: u16,
    stepper: Option<Stepper<'r, R>>,
    // every generation has been handed out; reuse would alias an old handle
    retired: bool,
}

impl<'r, R: ?Sized> Slot<'r, R> {
    const fn vacant() -> Self {
        Self {
            generation: 0,
            stepper: None,
            retired: false,
        }
    }

    #[inline]
    fn is_vacant(&self) -> bool {
        self.stepper.is_none() && !self.retired
    }
}

/// A pool of at most `N` simultaneously active steppers.
///
/// The pool is a plain value. Whoever composes the system owns it; there is
/// no global instance.
pub struct StepperPool<'r, R: ?Sized, const N: usize = MAX_STEPPERS> {
    slots: [Slot<'r, R>; N],
}

impl<'r, R: Register + ?Sized, const N: usize> Default for StepperPool<'r, R, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, R: Register + ?Sized, const N: usize> StepperPool<'r, R, N> {
    const INDEX_FITS: () = assert!(N <= u16::MAX as usize, "pool capacity exceeds handle range");

    /// Create an empty pool.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::INDEX_FITS;
        Self {
            slots: core::array::from_fn(|_| Slot::vacant()),
        }
    }

    /// Bring up a stepper in the first vacant slot.
    ///
    /// Every line is driven low and then switched to output, in the order
    /// DIR, ENABLE, STEP, MS1, MS2, MS3. The new stepper starts at full step,
    /// position 0, forward, driver enabled.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Exhausted` if no slot is vacant. Nothing is
    /// written in that case.
    pub fn construct(&mut self, attr: StepperAttr<'r, R>) -> Result<Handle> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_vacant())
            .ok_or(PoolError::Exhausted { capacity: N })?;

        slot.stepper = Some(Stepper::bring_up(attr));
        let handle = Handle::new(index as u16, slot.generation);
        debug!("stepper {} constructed", handle);
        Ok(handle)
    }

    /// Release the stepper behind `handle`.
    ///
    /// Pins keep whatever state they were last driven to. Releasing a handle
    /// that is already released, stale, or out of range does nothing, so
    /// calling this twice is harmless.
    ///
    /// A slot whose generation counter is exhausted is retired instead of
    /// wrapping, and is never handed out again.
    pub fn destruct(&mut self, handle: Handle) {
        match self.slots.get_mut(handle.index()) {
            Some(slot) if slot.generation == handle.generation() && slot.stepper.is_some() => {
                slot.stepper = None;
                match slot.generation.checked_add(1) {
                    Some(next) => slot.generation = next,
                    None => {
                        slot.retired = true;
                        debug!("slot {} retired", handle.index());
                    }
                }
                debug!("stepper {} destructed", handle);
            }
            _ => trace!("ignoring release of stale stepper {}", handle),
        }
    }

    /// Check whether `handle` refers to an active stepper.
    pub fn is_active(&self, handle: Handle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Total number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of active steppers.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.stepper.is_some()).count()
    }

    /// Number of slots available to [`construct`](Self::construct).
    pub fn vacant_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_vacant()).count()
    }

    /// Handles of all active steppers, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.stepper.is_some())
            .map(|(index, slot)| Handle::new(index as u16, slot.generation))
    }

    /// Look up the stepper behind `handle`.
    ///
    /// Every handle-keyed operation goes through here or [`resolve_mut`](Self::resolve_mut).
    pub(crate) fn resolve(&self, handle: Handle) -> Result<&Stepper<'r, R>> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.stepper.as_ref())
            .ok_or_else(|| PoolError::HandleInvalid(handle).into())
    }

    pub(crate) fn resolve_mut(&mut self, handle: Handle) -> Result<&mut Stepper<'r, R>> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.stepper.as_mut())
            .ok_or_else(|| PoolError::HandleInvalid(handle).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::hw::{PinBinding, PinSet, SimRegister};

    fn attr<'r>(port: &'r SimRegister, ddr: &'r SimRegister, speed: u8) -> StepperAttr<'r, SimRegister> {
        let pin = |bit: u8| PinBinding::new(port, ddr, 1 << bit);
        StepperAttr::new(
            PinSet {
                dir: pin(0),
                enable: pin(1),
                step: pin(2),
                ms1: pin(3),
                ms2: pin(4),
                ms3: pin(5),
            },
            speed,
        )
    }

    #[test]
    fn test_construct_until_exhausted() {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();

        let a = pool.construct(attr(&port, &ddr, 1)).unwrap();
        let b = pool.construct(attr(&port, &ddr, 2)).unwrap();
        assert_eq!((a.index(), b.index()), (0, 1));

        port.reset_writes();
        let result = pool.construct(attr(&port, &ddr, 3));
        assert_eq!(result, Err(Error::Pool(PoolError::Exhausted { capacity: 2 })));
        assert_eq!(port.write_count(), 0);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_destruct_bumps_generation() {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();

        let old = pool.construct(attr(&port, &ddr, 1)).unwrap();
        pool.destruct(old);
        assert!(!pool.is_active(old));

        let new = pool.construct(attr(&port, &ddr, 1)).unwrap();
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());

        // stale release must not take down the new occupant
        pool.destruct(old);
        assert!(pool.is_active(new));
    }

    #[test]
    fn test_handles_lists_active_slots() {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister, 4> = StepperPool::new();

        let handles: Vec<_> = (0..4)
            .map(|_| pool.construct(attr(&port, &ddr, 0)).unwrap())
            .collect();
        pool.destruct(handles[1]);
        pool.destruct(handles[2]);

        let live: Vec<_> = pool.handles().collect();
        assert_eq!(live, [handles[0], handles[3]]);
        assert_eq!(pool.vacant_count(), 2);
        assert_eq!(pool.capacity(), 4);
    }

    #[test]
    fn test_slot_retired_when_generation_exhausted() {
        let (port, ddr) = (SimRegister::default(), SimRegister::default());
        let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();

        let first = pool.construct(attr(&port, &ddr, 0)).unwrap();
        pool.destruct(first);
        for generation in 1..=u16::MAX {
            let h = pool.construct(attr(&port, &ddr, 0)).unwrap();
            assert_eq!((h.index(), h.generation()), (0, generation));
            pool.destruct(h);
        }

        // slot 0 has issued every generation and stays out of service
        assert_eq!(pool.vacant_count(), 1);
        let next = pool.construct(attr(&port, &ddr, 0)).unwrap();
        assert_eq!(next.index(), 1);
        assert!(!pool.is_active(first));
        assert_eq!(
            pool.set_step_size(first, crate::motor::StepSize::Half),
            Err(Error::Pool(PoolError::HandleInvalid(first)))
        );

        pool.destruct(first);
        assert_eq!(
            pool.construct(attr(&port, &ddr, 0)),
            Err(Error::Pool(PoolError::Exhausted { capacity: 2 }))
        );
        assert_eq!(pool.active_count(), 1);
    }
}
