//! The growable array.
//!
//! [`SimpleVec`] keeps its live elements in the prefix `[0, len)` of a
//! `RawBuf`; slots `[len, capacity)` are uninitialised. Every operation
//! that needs more room builds a complete replacement buffer first and then
//! swaps it in, so the receiver is never observed half-moved.

#![allow(unsafe_code)]

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use keel_core::{OutOfRange, ReserveHint, TryReserveError};

use crate::iter::IntoIter;
use crate::raw::{capacity_overflow, RawBuf};

/// A contiguous, growable array with amortised O(1) append.
///
/// Growth doubles the capacity (starting at 1) whenever an append or
/// insertion finds the buffer full. [`reserve`](Self::reserve) grows to
/// exactly the requested capacity. Capacity never shrinks except through
/// [`resize`](Self::resize), which sets it to the new length when growing.
///
/// Any operation that reallocates invalidates every index-derived pointer
/// and every outstanding borrow; the borrow checker enforces the latter.
///
/// ```
/// use keel_vec::SimpleVec;
///
/// let mut v = SimpleVec::new();
/// v.push_back(10);
/// v.push_back(20);
/// v.insert(1, 15);
/// assert_eq!(v, [10, 15, 20]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct SimpleVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> SimpleVec<T> {
    /// An empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// An empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// An empty array sized by a [`ReserveHint`].
    ///
    /// ```
    /// use keel_core::reserve;
    /// use keel_vec::SimpleVec;
    ///
    /// let v: SimpleVec<String> = SimpleVec::with_reserved(reserve(5));
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 5);
    /// ```
    pub fn with_reserved(hint: ReserveHint) -> Self {
        Self::with_capacity(hint.capacity())
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, len)` are initialised; the pointer is non-null
        // and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange { index, len })
    }

    /// Ensure `capacity() >= new_capacity`.
    ///
    /// Reallocates to exactly `new_capacity` when the current capacity is
    /// smaller; otherwise does nothing. Never changes the length or any
    /// element.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(RawBuf::with_capacity(new_capacity), "reserve");
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`TryReserveError`] if the allocation cannot be made. The
    /// array is left untouched in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
        if new_capacity > self.capacity() {
            let fresh = RawBuf::try_with_capacity(new_capacity)?;
            self.relocate(fresh, "try_reserve");
        }
        Ok(())
    }

    /// Append `value`, doubling the capacity first if the array is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.relocate(RawBuf::with_capacity(self.grown_capacity()), "push_back");
        }
        // SAFETY: `len < capacity` after the growth check.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Insert `value` before the element at `index`, shifting the tail one
    /// slot right. `index == len` appends. Returns the index of the inserted
    /// element.
    ///
    /// A full array doubles its capacity (0 becomes 1): the prefix is moved
    /// into the new buffer, the value placed, then the suffix moved in
    /// behind it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity() {
            let mut fresh = RawBuf::with_capacity(self.grown_capacity());
            tracing::trace!(
                op = "insert",
                from = self.capacity(),
                to = fresh.capacity(),
                len,
                "reallocating"
            );
            // SAFETY: `fresh` has room for `len + 1` elements and does not
            // overlap `self.buf`. The old slots become logically
            // uninitialised once the buffers are swapped below.
            unsafe {
                let src = self.buf.as_ptr();
                let dst = fresh.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }
            self.buf.swap(&mut fresh);
        } else {
            // SAFETY: `len < capacity`, so slot `len` exists; `ptr::copy`
            // handles the overlapping shift.
            unsafe {
                let at = self.buf.as_mut_ptr().add(index);
                ptr::copy(at, at.add(1), len - index);
                at.write(value);
            }
        }
        self.len += 1;
        index
    }

    /// Remove and return the element at `index`, shifting the tail one slot
    /// left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len`, so the slot is live. After the read it is
        // logically uninitialised and immediately overwritten by the shift.
        unsafe {
            let at = self.buf.as_mut_ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drop the element at `index` and return the index that now holds the
    /// following element (`len()` if the last element was erased).
    ///
    /// Erasing from an empty array is a no-op returning 0.
    ///
    /// # Panics
    ///
    /// Panics if the array is non-empty and `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        if self.is_empty() {
            return 0;
        }
        drop(self.remove(index));
        index
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use [`try_pop_back`](Self::try_pop_back)
    /// when emptiness is not already ruled out.
    pub fn pop_back(&mut self) -> T {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVec");
        self.len -= 1;
        // SAFETY: slot `len` was live before the decrement.
        unsafe { self.buf.as_ptr().add(self.len).read() }
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn try_pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_back())
        }
    }

    /// Drop every element past `len`. No effect if `len >= self.len()`.
    /// Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail_len = self.len - len;
        // The length is lowered before dropping so a panicking destructor
        // cannot cause a double drop.
        self.len = len;
        // SAFETY: slots `[len, len + tail_len)` were live.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drop every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resize to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Shrinking truncates in place. Growing (including `new_len == len`)
    /// reallocates to exactly `new_len` slots, discarding spare capacity
    /// beyond it.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len < self.len {
            self.truncate(new_len);
            return;
        }
        if new_len != self.capacity() {
            self.relocate(RawBuf::with_capacity(new_len), "resize");
        }
        while self.len < new_len {
            // SAFETY: capacity is exactly `new_len > len`.
            unsafe { self.buf.as_mut_ptr().add(self.len).write(f()) };
            self.len += 1;
        }
    }

    /// Exchange contents and capacity with `other` in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Capacity after one doubling step.
    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            cap => cap.checked_mul(2).unwrap_or_else(|| capacity_overflow()),
        }
    }

    /// Move all live elements to the front of `fresh` and adopt it. The old
    /// allocation is freed without dropping anything.
    fn relocate(&mut self, mut fresh: RawBuf<T>, op: &'static str) {
        debug_assert!(fresh.capacity() >= self.len);
        tracing::trace!(
            op,
            from = self.capacity(),
            to = fresh.capacity(),
            len = self.len,
            "reallocating"
        );
        // SAFETY: `fresh` holds at least `len` slots and is a distinct
        // allocation. Moved-out slots are never read again: the old buffer
        // ends up in `fresh`, which only deallocates.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len) };
        self.buf.swap(&mut fresh);
    }

    /// Detach the buffer and length, leaving `self` empty with capacity 0.
    pub(crate) fn into_raw_parts(mut self) -> (RawBuf<T>, usize) {
        let buf = std::mem::replace(&mut self.buf, RawBuf::new());
        let len = std::mem::replace(&mut self.len, 0);
        (buf, len)
    }
}

impl<T: Default> SimpleVec<T> {
    /// `len` default values; capacity equals `len`.
    pub fn with_len(len: usize) -> Self {
        let mut v = Self::with_capacity(len);
        v.resize_with(len, T::default);
        v
    }

    /// Resize to `new_len`, filling new slots with `T::default()`.
    ///
    /// See [`resize_with`](Self::resize_with) for the capacity rules.
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }
}

impl<T: Clone> SimpleVec<T> {
    /// `len` copies of `value`; capacity equals `len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        let mut v = Self::with_capacity(len);
        v.resize_with(len, || value.clone());
        v
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies hold exactly `len` slots, regardless of the source's capacity.
impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for value in self.iter() {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<ReserveHint> for SimpleVec<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_reserved(hint)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        v.extend(values);
        v
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut v = Self::with_capacity(iter.size_hint().0);
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_raw_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<SimpleVec<U>> for SimpleVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SimpleVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SimpleVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for SimpleVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

/// Lexicographic, element by element.
impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::reserve;
    use keel_test_utils::{DropCounter, NoDefault};

    fn capacities_while_pushing(n: usize) -> Vec<usize> {
        let mut v = SimpleVec::new();
        let mut caps = Vec::new();
        for i in 0..n {
            v.push_back(i);
            caps.push(v.capacity());
        }
        caps
    }

    #[test]
    fn new_is_empty_and_unallocated() {
        let v: SimpleVec<i32> = SimpleVec::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.iter().next().is_none());
    }

    #[test]
    fn push_back_doubles_capacity() {
        assert_eq!(
            capacities_while_pushing(9),
            vec![1, 2, 4, 4, 8, 8, 8, 8, 16]
        );
    }

    #[test]
    fn push_back_keeps_reserved_capacity() {
        let mut v = SimpleVec::with_capacity(10);
        for i in 0..10 {
            v.push_back(i);
            assert_eq!(v.capacity(), 10);
        }
        v.push_back(10);
        assert_eq!(v.capacity(), 20);
        assert_eq!(v.len(), 11);
    }

    #[test]
    fn reserve_grows_to_exact_request() {
        let mut v = SimpleVec::from([1, 2, 3]);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut v = SimpleVec::from([1, 2, 3]);
        v.reserve(10);
        v.reserve(5);
        assert_eq!(v.capacity(), 10);
        v.reserve(0);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn try_reserve_reports_overflow_and_leaves_array_intact() {
        let mut v = SimpleVec::from([1u64, 2]);
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(err, TryReserveError::CapacityOverflow);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 2);
        assert!(v.try_reserve(8).is_ok());
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn with_reserved_is_empty_with_capacity() {
        let v: SimpleVec<u8> = SimpleVec::from(reserve(7));
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 7);
    }

    #[test]
    fn with_len_default_fills() {
        let v: SimpleVec<i32> = SimpleVec::with_len(4);
        assert_eq!(v, [0, 0, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn from_elem_clones_value() {
        let v = SimpleVec::from_elem(3, String::from("ab"));
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.iter().all(|s| s == "ab"));
        assert!(SimpleVec::from_elem(0, 1).is_empty());
    }

    #[test]
    fn from_array_has_exact_capacity() {
        let v = SimpleVec::from([1, 2, 3, 4, 5]);
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn insert_scenario_from_empty() {
        let mut v = SimpleVec::new();
        v.push_back(10);
        v.push_back(20);
        let at = v.insert(1, 15);
        assert_eq!(at, 1);
        assert_eq!(v[at], 15);
        assert_eq!(v, [10, 15, 20]);
    }

    #[test]
    fn insert_into_empty_gives_capacity_one() {
        let mut v = SimpleVec::new();
        assert_eq!(v.insert(0, 'a'), 0);
        assert_eq!(v.capacity(), 1);
        assert_eq!(v, ['a']);
    }

    #[test]
    fn insert_doubles_when_full() {
        let mut v = SimpleVec::from([1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        v.insert(0, 0);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_with_spare_capacity_keeps_capacity() {
        let mut v = SimpleVec::with_capacity(8);
        v.extend([1, 2, 4]);
        v.insert(2, 3);
        v.insert(4, 5);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn insert_past_end_panics() {
        let mut v = SimpleVec::from([1, 2]);
        v.insert(3, 9);
    }

    #[test]
    fn erase_shifts_left_and_returns_next_index() {
        let mut v = SimpleVec::from([1, 2, 3, 4]);
        let next = v.erase(1);
        assert_eq!(next, 1);
        assert_eq!(v[next], 3);
        assert_eq!(v, [1, 3, 4]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn erase_last_returns_len() {
        let mut v = SimpleVec::from([1, 2, 3]);
        assert_eq!(v.erase(2), v.len());
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn erase_on_empty_is_noop() {
        let mut v: SimpleVec<i32> = SimpleVec::new();
        assert_eq!(v.erase(0), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn remove_returns_element() {
        let mut v = SimpleVec::from([String::from("a"), String::from("b")]);
        assert_eq!(v.remove(0), "a");
        assert_eq!(v, [String::from("b")]);
    }

    #[test]
    fn pop_back_returns_last() {
        let mut v = SimpleVec::from([1, 2, 3]);
        assert_eq!(v.pop_back(), 3);
        assert_eq!(v.len(), 2);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "pop_back on an empty SimpleVec")]
    fn pop_back_on_empty_panics() {
        let mut v: SimpleVec<i32> = SimpleVec::new();
        v.pop_back();
    }

    #[test]
    fn try_pop_back_on_empty_is_none() {
        let mut v: SimpleVec<i32> = SimpleVec::new();
        assert_eq!(v.try_pop_back(), None);
        v.push_back(1);
        assert_eq!(v.try_pop_back(), Some(1));
    }

    #[test]
    fn resize_shrink_keeps_capacity() {
        let mut v = SimpleVec::from([1, 2, 3, 4, 5]);
        v.resize(2);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn resize_grow_sets_capacity_to_new_len() {
        let mut v = SimpleVec::with_capacity(16);
        v.extend([7, 8]);
        v.resize(4);
        assert_eq!(v, [7, 8, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn resize_with_fills_from_closure() {
        let mut v: SimpleVec<NoDefault> = SimpleVec::new();
        let mut next = 0;
        v.resize_with(3, || {
            next += 1;
            NoDefault::new(next)
        });
        let ids: Vec<u32> = v.iter().map(NoDefault::id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = SimpleVec::from([1, 2, 3]);
        v.reserve(9);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 9);
    }

    #[test]
    fn at_is_bounds_checked() {
        let mut v = SimpleVec::from([10, 20]);
        assert_eq!(v.at(1), Ok(&20));
        assert_eq!(v.at(2), Err(OutOfRange { index: 2, len: 2 }));
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v[0], 11);
        assert!(v.at_mut(5).is_err());
    }

    #[test]
    #[should_panic]
    fn index_at_len_panics() {
        let v = SimpleVec::from([1, 2, 3]);
        std::hint::black_box(v[3]);
    }

    #[test]
    fn index_on_spare_capacity_panics_strictly() {
        let mut v = SimpleVec::with_capacity(4);
        v.push_back(1);
        assert!(v.get(1).is_none());
        assert!(v.at(1).is_err());
    }

    #[test]
    fn clone_is_independent_with_capacity_equal_len() {
        let mut original = SimpleVec::with_capacity(10);
        original.extend([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), 3);

        copy[0] = 100;
        copy.push_back(4);
        assert_eq!(original, [1, 2, 3]);
        original.erase(0);
        assert_eq!(copy, [100, 2, 3, 4]);
    }

    #[test]
    fn take_leaves_empty_unallocated_source() {
        let mut source = SimpleVec::from([1, 2, 3]);
        let moved = std::mem::take(&mut source);
        assert_eq!(moved, [1, 2, 3]);
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);
    }

    #[test]
    fn swap_with_exchanges_everything() {
        let mut a = SimpleVec::from([1, 2]);
        let mut b = SimpleVec::with_capacity(8);
        b.push_back(9);
        a.swap_with(&mut b);
        assert_eq!(a, [9]);
        assert_eq!(a.capacity(), 8);
        assert_eq!(b, [1, 2]);
        assert_eq!(b.capacity(), 2);
    }

    #[test]
    fn equality_requires_same_len_and_elements() {
        let a = SimpleVec::from([1, 2, 3]);
        let mut b = SimpleVec::with_capacity(50);
        b.extend([1, 2, 3]);
        assert_eq!(a, b);
        b.push_back(4);
        assert_ne!(a, b);
        assert_ne!(SimpleVec::from([1, 2, 4]), a);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = SimpleVec::from([1, 2, 3]);
        let b = SimpleVec::from([1, 2, 4]);
        let prefix = SimpleVec::from([1, 2]);
        assert!(a < b);
        assert!(b > a);
        assert!(prefix < a);
        assert!(a <= a.clone());
        assert!(a >= prefix);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert!(SimpleVec::<i32>::new() < prefix);
    }

    #[test]
    fn iteration_by_ref_mut_and_value() {
        let mut v = SimpleVec::from([1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        let seen: Vec<i32> = (&v).into_iter().copied().collect();
        assert_eq!(seen, [10, 20, 30]);
        let owned: Vec<i32> = v.into_iter().rev().collect();
        assert_eq!(owned, [30, 20, 10]);
    }

    #[test]
    fn debug_formats_as_list() {
        let v = SimpleVec::from([1, 2]);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn elements_need_not_be_default() {
        let mut v = SimpleVec::new();
        v.push_back(NoDefault::new(1));
        v.insert(0, NoDefault::new(0));
        v.reserve(32);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].id(), 0);
    }

    #[test]
    fn every_element_dropped_exactly_once() {
        let drops = DropCounter::new();
        {
            let mut v = SimpleVec::new();
            for i in 0..10 {
                v.push_back(drops.track(i));
            }
            v.insert(3, drops.track(100));
            v.erase(0);
            drop(v.pop_back());
            v.truncate(5);
            assert_eq!(drops.count(), 6);
            let copy = v.clone();
            drop(copy);
            assert_eq!(drops.count(), 11);
        }
        assert_eq!(drops.count(), 16);
    }

    #[test]
    fn spare_capacity_is_never_dropped() {
        let drops = DropCounter::new();
        let mut v = SimpleVec::with_capacity(16);
        v.push_back(drops.track(0));
        v.reserve(64);
        drop(v);
        assert_eq!(drops.count(), 1);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = SimpleVec::new();
        for _ in 0..5 {
            v.push_back(());
        }
        v.insert(2, ());
        assert_eq!(v.len(), 6);
        assert_eq!(v.capacity(), 8);
        v.erase(0);
        assert_eq!(v.len(), 5);
    }

    mod proptests {
        use super::*;
        use keel_test_utils::{vec_ops, VecOp};
        use proptest::prelude::*;

        fn apply(v: &mut SimpleVec<i32>, op: &VecOp) {
            match *op {
                VecOp::PushBack(x) => v.push_back(x),
                VecOp::Insert(raw, x) => {
                    v.insert(VecOp::insert_index(raw, v.len()), x);
                }
                VecOp::Erase(raw) => {
                    if let Some(i) = VecOp::erase_index(raw, v.len()) {
                        v.erase(i);
                    }
                }
                VecOp::PopBack => {
                    v.try_pop_back();
                }
                VecOp::Reserve(n) => v.reserve(n),
                VecOp::Resize(n) => v.resize(n),
                VecOp::Clear => v.clear(),
            }
        }

        proptest! {
            #[test]
            fn matches_std_vec_model(ops in vec_ops(64)) {
                let mut v = SimpleVec::new();
                let mut model = Vec::new();
                for op in &ops {
                    apply(&mut v, op);
                    op.apply_to_model(&mut model);
                    prop_assert!(v.len() <= v.capacity());
                }
                prop_assert_eq!(v.as_slice(), model.as_slice());
            }

            #[test]
            fn reserve_preserves_contents(
                values in proptest::collection::vec(any::<i32>(), 0..32),
                n in 0usize..64,
            ) {
                let mut v: SimpleVec<i32> = values.iter().copied().collect();
                let before_cap = v.capacity();
                v.reserve(n);
                prop_assert!(v.capacity() >= n);
                prop_assert!(v.capacity() >= before_cap);
                prop_assert_eq!(v.as_slice(), values.as_slice());
            }

            #[test]
            fn capacity_is_power_of_two_under_pushes(n in 1usize..200) {
                let mut v = SimpleVec::new();
                for i in 0..n {
                    v.push_back(i);
                }
                prop_assert!(v.capacity().is_power_of_two());
                prop_assert!(v.capacity() >= n && v.capacity() < 2 * n);
            }

            #[test]
            fn ordering_agrees_with_slices(
                a in proptest::collection::vec(0u8..4, 0..6),
                b in proptest::collection::vec(0u8..4, 0..6),
            ) {
                let va: SimpleVec<u8> = a.iter().copied().collect();
                let vb: SimpleVec<u8> = b.iter().copied().collect();
                prop_assert_eq!(va == vb, a == b);
                prop_assert_eq!(va.partial_cmp(&vb), a.partial_cmp(&b));
            }
        }
    }
}
