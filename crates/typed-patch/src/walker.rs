//! Runtime graph walker.
//!
//! [`locate`] follows a path through a live value one segment at a time and
//! returns a [`Position`]: a handle on the member or sequence slot the last
//! segment addresses. Values cross a slot boundary as `serde_json::Value`, so
//! the walker is written once against [`Node`] rather than per entity type.

use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use typed_patch_path::PathSegment;

use crate::error::ApplyErrorKind;
use crate::finite;
use crate::shape::{Patchable, Shape};

/// Runtime view of one value in the object graph.
pub enum Node<'a> {
    Record(&'a mut dyn Record),
    Sequence(&'a mut dyn Sequence),
    Leaf,
    /// An unset optional value.
    Absent,
}

impl Node<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Node::Record(_) => "a record",
            Node::Sequence(_) => "a sequence",
            Node::Leaf => "a leaf value",
            Node::Absent => "an absent value",
        }
    }
}

/// A structured value whose members can be read and written by name.
pub trait Record {
    fn type_name(&self) -> &'static str;

    /// Runtime view of a member, for descending further.
    fn member_mut(&mut self, name: &str) -> Option<Node<'_>>;

    fn get_member(&self, name: &str) -> Result<Value, ApplyErrorKind>;

    fn set_member(&mut self, name: &str, value: Value) -> Result<(), ApplyErrorKind>;

    /// Reset a member to its type's default.
    fn clear_member(&mut self, name: &str) -> Result<(), ApplyErrorKind>;
}

/// An ordered, indexable container.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element_mut(&mut self, index: usize) -> Option<Node<'_>>;

    fn get(&self, index: usize) -> Result<Value, ApplyErrorKind>;

    /// Overwrite in place.
    fn set(&mut self, index: usize, value: Value) -> Result<(), ApplyErrorKind>;

    /// Insert before `index`; `index == len` appends.
    fn insert(&mut self, index: usize, value: Value) -> Result<(), ApplyErrorKind>;

    /// Remove the element, shifting later elements down.
    fn remove(&mut self, index: usize) -> Result<(), ApplyErrorKind>;
}

/// Serialize a slot's current value.
///
/// Fails with [`ApplyErrorKind::Read`] if the value holds a NaN or infinite
/// float, which JSON would otherwise turn into `null`.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, ApplyErrorKind> {
    finite::check(value).map_err(ApplyErrorKind::Read)?;
    serde_json::to_value(value).map_err(ApplyErrorKind::Read)
}

/// Deserialize a payload into a slot's concrete type.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApplyErrorKind> {
    serde_json::from_value(value).map_err(ApplyErrorKind::TypeMismatch)
}

fn out_of_range(index: usize, len: usize) -> ApplyErrorKind {
    ApplyErrorKind::IndexOutOfRange { index, len }
}

// ── Sequences ─────────────────────────────────────────────────────────────

impl<T> Sequence for Vec<T>
where
    T: Patchable + Serialize + DeserializeOwned,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_mut(&mut self, index: usize) -> Option<Node<'_>> {
        self.get_mut(index).map(|item| item.node())
    }

    fn get(&self, index: usize) -> Result<Value, ApplyErrorKind> {
        let item = self.as_slice().get(index).ok_or_else(|| out_of_range(index, self.len()))?;
        to_value(item)
    }

    fn set(&mut self, index: usize, value: Value) -> Result<(), ApplyErrorKind> {
        let len = Vec::len(self);
        let slot = self.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
        *slot = from_value(value)?;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: Value) -> Result<(), ApplyErrorKind> {
        if index > Vec::len(self) {
            return Err(out_of_range(index, Vec::len(self)));
        }
        let item = from_value(value)?;
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), ApplyErrorKind> {
        if index >= Vec::len(self) {
            return Err(out_of_range(index, Vec::len(self)));
        }
        Vec::remove(self, index);
        Ok(())
    }
}

impl<T> Sequence for VecDeque<T>
where
    T: Patchable + Serialize + DeserializeOwned,
{
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element_mut(&mut self, index: usize) -> Option<Node<'_>> {
        self.get_mut(index).map(|item| item.node())
    }

    fn get(&self, index: usize) -> Result<Value, ApplyErrorKind> {
        let item = VecDeque::get(self, index).ok_or_else(|| out_of_range(index, self.len()))?;
        to_value(item)
    }

    fn set(&mut self, index: usize, value: Value) -> Result<(), ApplyErrorKind> {
        let len = VecDeque::len(self);
        let slot = self.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
        *slot = from_value(value)?;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: Value) -> Result<(), ApplyErrorKind> {
        if index > VecDeque::len(self) {
            return Err(out_of_range(index, VecDeque::len(self)));
        }
        let item = from_value(value)?;
        VecDeque::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), ApplyErrorKind> {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index)
            .map(drop)
            .ok_or_else(|| out_of_range(index, len))
    }
}

impl<T> Patchable for Vec<T>
where
    T: Patchable + Serialize + DeserializeOwned,
{
    fn shape() -> Shape {
        Shape::Sequence { element: T::shape }
    }

    fn node(&mut self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T> Patchable for VecDeque<T>
where
    T: Patchable + Serialize + DeserializeOwned,
{
    fn shape() -> Shape {
        Shape::Sequence { element: T::shape }
    }

    fn node(&mut self) -> Node<'_> {
        Node::Sequence(self)
    }
}

// ── Positions ─────────────────────────────────────────────────────────────

/// The slot addressed by the last segment of a path.
pub enum Position<'a> {
    Property {
        record: &'a mut dyn Record,
        name: &'a str,
    },
    Index {
        sequence: &'a mut dyn Sequence,
        index: usize,
    },
}

impl Position<'_> {
    /// Read the current value.
    pub fn get(&self) -> Result<Value, ApplyErrorKind> {
        match self {
            Position::Property { record, name } => record.get_member(name),
            Position::Index { sequence, index } => sequence.get(*index),
        }
    }

    /// Overwrite the slot; sequences are not shifted.
    pub fn set(&mut self, value: Value) -> Result<(), ApplyErrorKind> {
        match self {
            Position::Property { record, name } => record.set_member(name, value),
            Position::Index { sequence, index } => sequence.set(*index, value),
        }
    }

    /// Insert into a sequence, shifting later elements. A property is set.
    pub fn insert(&mut self, value: Value) -> Result<(), ApplyErrorKind> {
        match self {
            Position::Property { record, name } => record.set_member(name, value),
            Position::Index { sequence, index } => sequence.insert(*index, value),
        }
    }

    /// Clear a property or remove a sequence element.
    pub fn remove(&mut self) -> Result<(), ApplyErrorKind> {
        match self {
            Position::Property { record, name } => record.clear_member(name),
            Position::Index { sequence, index } => sequence.remove(*index),
        }
    }

    /// Read the current value, then remove it.
    pub fn take(&mut self) -> Result<Value, ApplyErrorKind> {
        let value = self.get()?;
        self.remove()?;
        Ok(value)
    }
}

/// Walk `root` along `path` and return the addressed slot.
///
/// Every segment but the last must resolve to an existing value; sequence
/// indexes are bounds-checked against the live container. The last segment
/// is only checked against the kind of its container, so a position one past
/// the end of a sequence can still be used for insertion.
pub fn locate<'a, T>(root: &'a mut T, path: &'a [PathSegment]) -> Result<Position<'a>, ApplyErrorKind>
where
    T: Patchable + ?Sized,
{
    let (last, parents) = path.split_last().ok_or(ApplyErrorKind::EmptyPath)?;
    let mut node = root.node();
    for segment in parents {
        node = step(node, segment)?;
    }
    match (node, last) {
        (Node::Record(record), PathSegment::Property(name)) => {
            Ok(Position::Property { record, name })
        }
        (Node::Sequence(sequence), PathSegment::Index(index)) => Ok(Position::Index {
            sequence,
            index: *index,
        }),
        (node, segment) => Err(ApplyErrorKind::Unresolvable {
            segment: segment.clone(),
            found: node.kind(),
        }),
    }
}

fn step<'a>(node: Node<'a>, segment: &PathSegment) -> Result<Node<'a>, ApplyErrorKind> {
    match (node, segment) {
        (Node::Record(record), PathSegment::Property(name)) => record
            .member_mut(name)
            .ok_or_else(|| ApplyErrorKind::MemberNotFound(name.clone())),
        (Node::Sequence(sequence), PathSegment::Index(index)) => {
            let len = sequence.len();
            sequence
                .element_mut(*index)
                .ok_or_else(|| out_of_range(*index, len))
        }
        (node, segment) => Err(ApplyErrorKind::Unresolvable {
            segment: segment.clone(),
            found: node.kind(),
        }),
    }
}
