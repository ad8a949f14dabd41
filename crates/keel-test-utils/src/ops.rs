//! Scripted container operations with a `Vec`-backed reference model.
//!
//! Raw indices in an op are reduced against the container's current length
//! at apply time, so every generated script is valid for any state.

use proptest::prelude::*;

/// One step of a growable-array script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecOp {
    PushBack(i32),
    /// Insert before the element at `raw % (len + 1)`.
    Insert(usize, i32),
    /// Erase the element at `raw % len`; skipped when empty.
    Erase(usize),
    /// Pop the last element; skipped when empty.
    PopBack,
    Reserve(usize),
    /// Resize, default-filling with 0.
    Resize(usize),
    Clear,
}

impl VecOp {
    pub fn insert_index(raw: usize, len: usize) -> usize {
        raw % (len + 1)
    }

    pub fn erase_index(raw: usize, len: usize) -> Option<usize> {
        (len > 0).then(|| raw % len)
    }

    /// Apply this op to the reference model.
    pub fn apply_to_model(&self, model: &mut Vec<i32>) {
        match *self {
            Self::PushBack(x) => model.push(x),
            Self::Insert(raw, x) => model.insert(Self::insert_index(raw, model.len()), x),
            Self::Erase(raw) => {
                if let Some(i) = Self::erase_index(raw, model.len()) {
                    model.remove(i);
                }
            }
            Self::PopBack => {
                model.pop();
            }
            Self::Reserve(_) => {}
            Self::Resize(n) => model.resize(n, 0),
            Self::Clear => model.clear(),
        }
    }
}

fn vec_op() -> impl Strategy<Value = VecOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(VecOp::PushBack),
        3 => (any::<usize>(), any::<i32>()).prop_map(|(raw, x)| VecOp::Insert(raw, x)),
        2 => any::<usize>().prop_map(VecOp::Erase),
        1 => Just(VecOp::PopBack),
        1 => (0usize..48).prop_map(VecOp::Reserve),
        1 => (0usize..48).prop_map(VecOp::Resize),
        1 => Just(VecOp::Clear),
    ]
}

/// Scripts of up to `max_len` growable-array ops.
pub fn vec_ops(max_len: usize) -> impl Strategy<Value = Vec<VecOp>> {
    proptest::collection::vec(vec_op(), 0..max_len)
}

/// One step of a linked-sequence script.
///
/// Positions are encoded as `raw % (len + 1)`: 0 is the before-begin
/// anchor, `k` is the `k`-th element (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOp {
    PushFront(i32),
    InsertAfter(usize, i32),
    /// Erase the successor of a position; a no-op at the last element.
    EraseAfter(usize),
    /// Pop the first element; skipped when empty.
    PopFront,
    Clear,
}

impl ListOp {
    /// How many steps past the anchor the encoded position lies.
    pub fn position_index(raw: usize, len: usize) -> usize {
        raw % (len + 1)
    }

    /// Apply this op to the reference model.
    pub fn apply_to_model(&self, model: &mut Vec<i32>) {
        match *self {
            Self::PushFront(x) => model.insert(0, x),
            Self::InsertAfter(raw, x) => {
                model.insert(Self::position_index(raw, model.len()), x);
            }
            Self::EraseAfter(raw) => {
                let at = Self::position_index(raw, model.len());
                if at < model.len() {
                    model.remove(at);
                }
            }
            Self::PopFront => {
                if !model.is_empty() {
                    model.remove(0);
                }
            }
            Self::Clear => model.clear(),
        }
    }
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        3 => any::<i32>().prop_map(ListOp::PushFront),
        4 => (any::<usize>(), any::<i32>()).prop_map(|(raw, x)| ListOp::InsertAfter(raw, x)),
        3 => any::<usize>().prop_map(ListOp::EraseAfter),
        1 => Just(ListOp::PopFront),
        1 => Just(ListOp::Clear),
    ]
}

/// Scripts of up to `max_len` linked-sequence ops.
pub fn list_ops(max_len: usize) -> impl Strategy<Value = Vec<ListOp>> {
    proptest::collection::vec(list_op(), 0..max_len)
}
