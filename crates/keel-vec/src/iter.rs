//! By-value iteration.

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::raw::RawBuf;

/// Owning iterator over the elements of a `SimpleVec`.
///
/// Created by `SimpleVec::into_iter`. Elements not yielded are dropped
/// together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    /// Live elements are `[start, end)`.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` are live slots of `buf`.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start < end`, so the slot is live; advancing `start`
        // hands ownership to the caller.
        let value = unsafe { self.buf.as_ptr().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` was live before the decrement.
        Some(unsafe { self.buf.as_ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        let start = self.start;
        self.start = self.end;
        // SAFETY: `[start, start + remaining)` were live and are no longer
        // reachable through `self`.
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(start), remaining);
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
