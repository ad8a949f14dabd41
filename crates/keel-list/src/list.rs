//! The singly linked sequence.
//!
//! Nodes live in a slot arena owned by the list. Slot 0 is the anchor: it
//! never holds a value and never moves, and its `next` link is the first
//! element. Every structural operation is "relink around a known
//! predecessor", which is why front insertion needs no special case.
//!
//! ```text
//! slots: [Anchor]──▶[Node a]──▶[Node b]──▶ None
//!            0          3          1
//! free:  2 ─▶ 4 ─▶ None        (released slots, reused first)
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use keel_core::ReserveHint;

use crate::iter::{IntoIter, Iter, IterMut};
use crate::position::Position;

const ANCHOR: u32 = 0;

pub(crate) struct Slot<T> {
    /// Bumped every time the slot's node is released.
    pub(crate) generation: u32,
    pub(crate) entry: Entry<T>,
}

pub(crate) enum Entry<T> {
    Anchor { next: Option<u32> },
    Node { value: T, next: Option<u32> },
    Vacant { next_free: Option<u32> },
}

/// A singly linked list with a before-begin anchor.
///
/// Insertion and removal are O(1) relative to a known [`Position`], and
/// never disturb positions of other nodes. Traversal is forward only.
///
/// ```
/// use keel_list::ForwardList;
///
/// let mut list = ForwardList::from([1, 3]);
/// let first = list.begin();
/// list.insert_after(first, 2);
/// list.push_front(0);
/// assert_eq!(list, [0, 1, 2, 3]);
///
/// let first = list.erase_after(list.before_begin());
/// assert_eq!(list[first], 1);
/// ```
pub struct ForwardList<T> {
    slots: Vec<Slot<T>>,
    /// Head of the chain of vacant slots.
    free: Option<u32>,
    len: usize,
}

impl<T> ForwardList<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty list whose node arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.saturating_add(1));
        slots.push(Slot {
            generation: 0,
            entry: Entry::Anchor { next: None },
        });
        Self {
            slots,
            free: None,
            len: 0,
        }
    }

    /// An empty list sized by a [`ReserveHint`].
    pub fn with_reserved(hint: ReserveHint) -> Self {
        Self::with_capacity(hint.capacity())
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The anchor preceding the first element. Valid for the lifetime of
    /// the list; does not refer to a value.
    pub fn before_begin(&self) -> Position {
        Position::BEFORE_BEGIN
    }

    /// The first element, or [`Position::END`] when empty.
    pub fn begin(&self) -> Position {
        self.position_of(self.link(ANCHOR))
    }

    /// Past-the-end. O(1).
    pub fn end(&self) -> Position {
        Position::END
    }

    /// The position following `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`Position::END`] or no longer names a node of
    /// this list.
    pub fn next(&self, pos: Position) -> Position {
        let at = self.resolve(pos);
        self.position_of(self.link(at))
    }

    /// The value at `pos`, or `None` for the boundary positions and stale
    /// positions.
    pub fn get(&self, pos: Position) -> Option<&T> {
        let slot = self.slots.get(pos.slot as usize)?;
        match &slot.entry {
            Entry::Node { value, .. } if slot.generation == pos.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        let slot = self.slots.get_mut(pos.slot as usize)?;
        if slot.generation != pos.generation {
            return None;
        }
        match &mut slot.entry {
            Entry::Node { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The first element.
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// The first element, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.begin();
        self.get_mut(first)
    }

    /// Prepend `value`. O(1).
    pub fn push_front(&mut self, value: T) {
        self.insert_after(Position::BEFORE_BEGIN, value);
    }

    /// Link a new node holding `value` right after `pos` and return its
    /// position. `pos` may be [`before_begin`](Self::before_begin).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`Position::END`] or stale.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
        let at = self.resolve(pos);
        let successor = self.link(at);
        let slot = self.alloc(value, successor);
        self.set_link(at, Some(slot));
        self.len += 1;
        self.position_of(Some(slot))
    }

    /// Unlink the node after `pos` and return its value. Returns `None`
    /// when `pos` is the last element or [`Position::END`].
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale.
    pub fn remove_after(&mut self, pos: Position) -> Option<T> {
        if pos.is_end() {
            return None;
        }
        let at = self.resolve(pos);
        let target = self.link(at)?;
        let (value, successor) = self.release(target);
        self.set_link(at, successor);
        self.len -= 1;
        Some(value)
    }

    /// Drop the node after `pos` and return the position that now follows
    /// `pos` (possibly [`Position::END`]). Erasing after the last element,
    /// or after `END`, changes nothing and returns `END`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale.
    pub fn erase_after(&mut self, pos: Position) -> Position {
        if pos.is_end() {
            return Position::END;
        }
        drop(self.remove_after(pos));
        self.next(pos)
    }

    /// Remove and return the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. Use
    /// [`try_pop_front`](Self::try_pop_front) when emptiness is not already
    /// ruled out.
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Some(value) => value,
            None => panic!("pop_front on an empty ForwardList"),
        }
    }

    /// Remove and return the first element, or `None` if empty.
    pub fn try_pop_front(&mut self) -> Option<T> {
        self.remove_after(Position::BEFORE_BEGIN)
    }

    /// Drop every element, front to back.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.len, "clearing list");
        while self.try_pop_front().is_some() {}
    }

    /// Exchange contents with `other` in O(1). Positions follow their nodes.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Borrowing iterator, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.link(ANCHOR), self.len)
    }

    /// Mutably borrowing iterator, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let first = self.link(ANCHOR);
        IterMut::new(&mut self.slots, first, self.len)
    }

    /// Walk to the final node (the anchor when empty). O(len).
    fn last_position(&self) -> Position {
        let mut at = ANCHOR;
        while let Some(next) = self.link(at) {
            at = next;
        }
        Position::new(at, self.slots[at as usize].generation)
    }

    /// Slot index for a position that must name the anchor or a live node.
    fn resolve(&self, pos: Position) -> u32 {
        assert!(!pos.is_end(), "position is past the end of the ForwardList");
        let live = self.slots.get(pos.slot as usize).is_some_and(|slot| {
            slot.generation == pos.generation && !matches!(slot.entry, Entry::Vacant { .. })
        });
        assert!(live, "stale or foreign ForwardList position: {pos:?}");
        pos.slot
    }

    fn position_of(&self, link: Option<u32>) -> Position {
        match link {
            Some(slot) => Position::new(slot, self.slots[slot as usize].generation),
            None => Position::END,
        }
    }

    fn link(&self, slot: u32) -> Option<u32> {
        match &self.slots[slot as usize].entry {
            Entry::Anchor { next } | Entry::Node { next, .. } => *next,
            Entry::Vacant { .. } => None,
        }
    }

    fn set_link(&mut self, slot: u32, link: Option<u32>) {
        match &mut self.slots[slot as usize].entry {
            Entry::Anchor { next } | Entry::Node { next, .. } => *next = link,
            Entry::Vacant { .. } => unreachable!("relinking vacant slot {slot}"),
        }
    }

    /// Place a node in a vacant slot, or a new one if none is free.
    fn alloc(&mut self, value: T, next: Option<u32>) -> u32 {
        let entry = Entry::Node { value, next };
        if let Some(slot) = self.free {
            let reused = &mut self.slots[slot as usize];
            let next_free = match reused.entry {
                Entry::Vacant { next_free } => next_free,
                _ => unreachable!("free chain reached live slot {slot}"),
            };
            reused.entry = entry;
            self.free = next_free;
            return slot;
        }
        let slot = match u32::try_from(self.slots.len()) {
            Ok(slot) if slot != u32::MAX => slot,
            _ => panic!("ForwardList node capacity exceeded"),
        };
        if self.slots.len() == self.slots.capacity() {
            tracing::trace!(slots = self.slots.len(), "growing node arena");
        }
        self.slots.push(Slot {
            generation: 0,
            entry,
        });
        slot
    }

    /// Vacate a node's slot, returning its value and successor link.
    fn release(&mut self, slot: u32) -> (T, Option<u32>) {
        let vacant = Entry::Vacant {
            next_free: self.free,
        };
        let released = &mut self.slots[slot as usize];
        match mem::replace(&mut released.entry, vacant) {
            Entry::Node { value, next } => {
                released.generation = released.generation.wrapping_add(1);
                self.free = Some(slot);
                (value, next)
            }
            _ => unreachable!("released slot {slot} held no value"),
        }
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        while self.try_pop_front().is_some() {}
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy, node by node, in traversal order.
impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Index<Position> for ForwardList<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        match self.get(pos) {
            Some(value) => value,
            None => panic!("{pos:?} does not refer to an element"),
        }
    }
}

impl<T> IndexMut<Position> for ForwardList<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        match self.get_mut(pos) {
            Some(value) => value,
            None => panic!("{pos:?} does not refer to an element"),
        }
    }
}

impl<T> From<ReserveHint> for ForwardList<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_reserved(hint)
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Builds front to back by inserting after a running tail.
impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

/// Appends after the current last element.
impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_position();
        for value in iter {
            tail = self.insert_after(tail, value);
        }
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<ForwardList<U>> for ForwardList<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &ForwardList<U>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for ForwardList<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.len == N && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

/// Lexicographic, element by element.
impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}
