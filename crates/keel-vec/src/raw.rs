//! Exclusively-owned, uninitialised slot storage.
//!
//! [`RawBuf`] allocates room for `capacity` values of `T` and frees it on
//! drop. It never constructs or drops elements: which slots are live is
//! tracked by the owner (`SimpleVec` keeps the live prefix in `len`).
//! Zero-sized requests and zero-sized `T` never touch the allocator.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use keel_core::TryReserveError;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its allocation, exactly like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only hands out `*const T`; see the `Send` impl.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An unallocated buffer with capacity 0.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`std::alloc::handle_alloc_error`] if the allocator fails.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(buf) => buf,
            Err(TryReserveError::CapacityOverflow) => capacity_overflow(),
            Err(TryReserveError::AllocFailed { .. }) => match Layout::array::<T>(capacity) {
                Ok(layout) => alloc::handle_alloc_error(layout),
                Err(_) => capacity_overflow(),
            },
        }
    }

    /// Allocate `capacity` slots, reporting failure instead of panicking.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout =
            Layout::array::<T>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _owns: PhantomData,
            });
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(TryReserveError::AllocFailed {
            bytes: layout.size(),
        })?;
        Ok(Self {
            ptr,
            cap: capacity,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to the first slot. Dangling (but aligned) when nothing is
    /// allocated.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchange allocations with `other` in O(1).
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY: `ptr` was returned by `alloc::alloc` with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unallocated() {
        let buf: RawBuf<u64> = RawBuf::new();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_ptr(), NonNull::<u64>::dangling().as_ptr());
    }

    #[test]
    fn with_capacity_allocates_writable_slots() {
        let mut buf: RawBuf<u32> = RawBuf::with_capacity(4);
        assert_eq!(buf.capacity(), 4);
        // SAFETY: four slots were allocated; u32 needs no drop.
        unsafe {
            for i in 0..4 {
                buf.as_mut_ptr().add(i).write(i as u32 * 10);
            }
            assert_eq!(buf.as_ptr().add(3).read(), 30);
        }
    }

    #[test]
    fn swap_exchanges_allocations() {
        let mut a: RawBuf<u8> = RawBuf::with_capacity(2);
        let mut b: RawBuf<u8> = RawBuf::with_capacity(8);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.capacity(), 8);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
    }

    #[test]
    fn zero_sized_types_never_allocate() {
        let buf: RawBuf<()> = RawBuf::with_capacity(1_000);
        assert_eq!(buf.capacity(), 1_000);
        assert_eq!(buf.as_ptr(), NonNull::<()>::dangling().as_ptr());
    }

    #[test]
    fn oversized_request_is_capacity_overflow() {
        let result = RawBuf::<u64>::try_with_capacity(usize::MAX);
        assert!(matches!(result, Err(TryReserveError::CapacityOverflow)));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn infallible_oversized_request_panics() {
        let _ = RawBuf::<u64>::with_capacity(usize::MAX / 2);
    }
}
