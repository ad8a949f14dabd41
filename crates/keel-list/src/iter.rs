//! Forward iterators over a [`ForwardList`].
#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::list::{Entry, ForwardList, Slot};

/// Borrowing iterator returned by [`ForwardList::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    next: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], first: Option<u32>, len: usize) -> Self {
        Self {
            slots,
            next: first,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let at = self.next?;
        let slots = self.slots;
        match &slots[at as usize].entry {
            Entry::Node { value, next } => {
                self.next = *next;
                self.remaining -= 1;
                Some(value)
            }
            _ => unreachable!("list link {at} points at a slot without a value"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

/// Mutably borrowing iterator returned by [`ForwardList::iter_mut`].
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    next: Option<u32>,
    remaining: usize,
    _borrow: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Slot<T>], first: Option<u32>, len: usize) -> Self {
        Self {
            slots: slots.as_mut_ptr(),
            next: first,
            remaining: len,
            _borrow: PhantomData,
        }
    }
}

// SAFETY: IterMut hands out `&mut T` exactly like `&mut [T]` would.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: shared access to the iterator exposes no `T`.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let at = self.next?;
        // SAFETY: `at` was read from a link of the list this iterator
        // mutably borrows, so it indexes inside the slot buffer. Links form
        // a chain without repeats, so each slot is reached at most once and
        // the returned references never alias.
        let slot = unsafe { &mut *self.slots.add(at as usize) };
        match &mut slot.entry {
            Entry::Node { value, next } => {
                self.next = *next;
                self.remaining -= 1;
                Some(value)
            }
            _ => unreachable!("list link {at} points at a slot without a value"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Owning iterator returned by [`ForwardList::into_iter`](IntoIterator::into_iter).
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.try_pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
