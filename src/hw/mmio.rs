//! Memory-mapped register access.
#![allow(unsafe_code)]

use core::cell::UnsafeCell;
use core::ptr;

use super::register::Register;

/// A memory-mapped 8-bit GPIO register (port or data-direction).
///
/// All access is volatile. Obtain a reference with [`Reg8::from_addr`] or
/// [`Reg8::from_ptr`]; the type is never constructed by value.
#[repr(transparent)]
pub struct Reg8 {
    value: UnsafeCell<u8>,
}

impl Reg8 {
    /// View the register at `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must be the address of a readable and writable 8-bit register
    /// that stays mapped for `'r`, and no other code may hold a `&mut`
    /// to that location during `'r`.
    #[inline]
    pub unsafe fn from_addr<'r>(addr: usize) -> &'r Self {
        Self::from_ptr(addr as *mut u8)
    }

    /// View the register behind `ptr`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Reg8::from_addr`]; `ptr` must also be non-null.
    #[inline]
    pub unsafe fn from_ptr<'r>(ptr: *mut u8) -> &'r Self {
        &*(ptr as *const Self)
    }

    /// Address of the register.
    #[inline]
    pub fn addr(&self) -> usize {
        self.value.get() as usize
    }
}

impl Register for Reg8 {
    #[inline]
    fn read(&self) -> u8 {
        // SAFETY: the constructor contract guarantees a valid mapped register.
        unsafe { ptr::read_volatile(self.value.get()) }
    }

    #[inline]
    fn write(&self, value: u8) {
        // SAFETY: as above.
        unsafe { ptr::write_volatile(self.value.get(), value) }
    }
}

impl core::fmt::Debug for Reg8 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reg8({:#x})", self.addr())
    }
}
