//! Apply engine.
//!
//! Replays recorded operations against a live instance, in order, each one
//! completing before the next starts.

use serde_json::Value;
use typed_patch_path::{format_path, PathSegment};

use crate::error::{ApplyError, ApplyErrorKind};
use crate::op::{Operation, OperationKind};
use crate::shape::Patchable;
use crate::walker::locate;

/// Options for [`apply_patch`].
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// If true, restore the instance to its pre-apply state when any
    /// operation fails. If false, operations applied before the failure stay
    /// applied.
    pub atomic: bool,
}

impl ApplyOptions {
    pub fn atomic() -> Self {
        Self { atomic: true }
    }
}

fn apply_at<T>(entity: &mut T, op: &Operation, index: usize) -> Result<(), ApplyError>
where
    T: Patchable + ?Sized,
{
    let fail = |path: &[PathSegment]| {
        let path = format_path(path);
        move |kind: ApplyErrorKind| ApplyError {
            index,
            op: op.kind(),
            path,
            kind,
        }
    };
    let payload = || op.value().cloned().unwrap_or(Value::Null);
    let path = op.path().as_slice();

    match op.kind() {
        OperationKind::Add => locate(entity, path)
            .and_then(|mut pos| pos.insert(payload()))
            .map_err(fail(path)),
        OperationKind::Remove => locate(entity, path)
            .and_then(|mut pos| pos.remove())
            .map_err(fail(path)),
        OperationKind::Replace => locate(entity, path)
            .and_then(|mut pos| pos.set(payload()))
            .map_err(fail(path)),
        OperationKind::Move => {
            let from = op.from().map(Vec::as_slice).unwrap_or_default();
            // The destination is resolved against the graph as it stands
            // after the source has been removed.
            let value = locate(entity, from)
                .and_then(|mut pos| pos.take())
                .map_err(fail(from))?;
            locate(entity, path)
                .and_then(|mut pos| pos.insert(value))
                .map_err(fail(path))
        }
    }
}

/// Apply a single operation to the instance (in-place mutation).
pub fn apply_op<T>(entity: &mut T, op: &Operation) -> Result<(), ApplyError>
where
    T: Patchable + ?Sized,
{
    apply_at(entity, op, 0)
}

/// Apply a sequence of operations in order.
///
/// Stops at the first failure. Operations before the failing one remain
/// applied.
pub fn apply_ops<T>(entity: &mut T, ops: &[Operation]) -> Result<(), ApplyError>
where
    T: Patchable + ?Sized,
{
    tracing::debug!("applying {} patch operations", ops.len());
    for (index, op) in ops.iter().enumerate() {
        tracing::trace!("operation [{}]: {}", index, op);
        apply_at(entity, op, index)?;
    }
    Ok(())
}

/// Apply a sequence of operations with options.
///
/// When `atomic` is set, the instance is cloned first and restored if any
/// operation fails.
pub fn apply_patch<T>(entity: &mut T, ops: &[Operation], options: &ApplyOptions) -> Result<(), ApplyError>
where
    T: Patchable + Clone,
{
    if !options.atomic {
        return apply_ops(entity, ops);
    }
    let snapshot = entity.clone();
    apply_ops(entity, ops).inspect_err(|err| {
        tracing::warn!("rolling back patch: {}", err);
        *entity = snapshot;
    })
}
