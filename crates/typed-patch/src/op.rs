//! Operation records.

use std::fmt;

use serde_json::Value;
use typed_patch_path::{format_path, Path};

/// The kind of edit an [`Operation`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Remove,
    Replace,
    Move,
}

impl OperationKind {
    /// Lowercase operation name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Remove => "remove",
            OperationKind::Replace => "replace",
            OperationKind::Move => "move",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded edit.
///
/// Operations are only created by [`PatchDocument`](crate::PatchDocument)
/// builder calls, after their paths have been validated, and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    path: Path,
    from: Option<Path>,
    value: Option<Value>,
}

impl Operation {
    pub(crate) fn add(path: Path, value: Value) -> Self {
        Self {
            kind: OperationKind::Add,
            path,
            from: None,
            value: Some(value),
        }
    }

    pub(crate) fn remove(path: Path) -> Self {
        Self {
            kind: OperationKind::Remove,
            path,
            from: None,
            value: None,
        }
    }

    pub(crate) fn replace(path: Path, value: Value) -> Self {
        Self {
            kind: OperationKind::Replace,
            path,
            from: None,
            value: Some(value),
        }
    }

    pub(crate) fn move_value(from: Path, path: Path) -> Self {
        Self {
            kind: OperationKind::Move,
            path,
            from: Some(from),
            value: None,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the operation name string.
    pub fn op_name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Target path; the destination for a move.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source path, present only for a move.
    pub fn from(&self) -> Option<&Path> {
        self.from.as_ref()
    }

    /// Payload, present for add and replace.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(
                f,
                "{} {} -> {}",
                self.kind,
                format_path(from),
                format_path(&self.path)
            ),
            None => write!(f, "{} {}", self.kind, format_path(&self.path)),
        }
    }
}
