//! Static shape descriptors and the [`Patchable`] introspection trait.
//!
//! A [`Shape`] describes what a type looks like to a patch path: a record with
//! named members, an indexable sequence of some element shape, or an opaque
//! leaf. Shapes are built from `fn` pointers so recursive entity types
//! describe themselves lazily.

use std::collections::{BTreeMap, HashMap};

use crate::walker::Node;

/// Declared shape of a patchable type.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// A structured value with named members.
    Record {
        name: &'static str,
        members: &'static [Member],
    },
    /// An ordered sequence addressed by index.
    Sequence { element: fn() -> Shape },
    /// A value replaced as a whole; no path may descend into it.
    Leaf { name: &'static str },
}

impl Shape {
    /// Short description used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Record { .. } => "record",
            Shape::Sequence { .. } => "sequence",
            Shape::Leaf { .. } => "leaf",
        }
    }

    /// Look up a declared member by exact name.
    pub fn member(&self, name: &str) -> Option<&'static Member> {
        match self {
            Shape::Record { members, .. } => members.iter().find(|m| m.name == name),
            _ => None,
        }
    }

    /// Element shape if this is a sequence.
    pub fn element(&self) -> Option<Shape> {
        match self {
            Shape::Sequence { element } => Some(element()),
            _ => None,
        }
    }
}

/// A declared member of a record shape.
#[derive(Debug, Clone, Copy)]
pub struct Member {
    pub name: &'static str,
    pub shape: fn() -> Shape,
}

impl Member {
    pub const fn new(name: &'static str, shape: fn() -> Shape) -> Self {
        Self { name, shape }
    }
}

/// A type that patch documents can address.
///
/// Usually derived with `#[derive(Patchable)]`. The derive implements
/// [`Record`](crate::Record) for the struct and describes each field here.
pub trait Patchable {
    /// The declared shape, consulted when building a document.
    fn shape() -> Shape
    where
        Self: Sized;

    /// A runtime view of this value, consulted when applying a document.
    fn node(&mut self) -> Node<'_>;
}

macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Patchable for $ty {
                fn shape() -> Shape {
                    Shape::Leaf { name: stringify!($ty) }
                }

                fn node(&mut self) -> Node<'_> {
                    Node::Leaf
                }
            }
        )*
    };
}

leaf!(
    bool, char, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    serde_json::Value,
);

impl<K, V, S> Patchable for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Leaf { name: "HashMap" }
    }

    fn node(&mut self) -> Node<'_> {
        Node::Leaf
    }
}

impl<K, V> Patchable for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Leaf { name: "BTreeMap" }
    }

    fn node(&mut self) -> Node<'_> {
        Node::Leaf
    }
}

impl<T: Patchable> Patchable for Option<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn node(&mut self) -> Node<'_> {
        match self {
            Some(inner) => inner.node(),
            None => Node::Absent,
        }
    }
}

impl<T: Patchable> Patchable for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn node(&mut self) -> Node<'_> {
        (**self).node()
    }
}
