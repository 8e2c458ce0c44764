use thiserror::Error;

use crate::element::ElementId;

/// Tree invariants whose violation aborts the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Invariant {
    #[error("rebuilding {element:?} in place produced a different element")]
    RebuildChangedIdentity { element: ElementId },
    #[error("{kind} requires a child but has none")]
    MissingChild { kind: &'static str },
    #[error("state of {element:?} is already borrowed by its own build")]
    StateInUse { element: ElementId },
}

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("failed to build {kind}")]
    Build {
        kind: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("tree invariant violated: {0}")]
    InvariantViolation(#[from] Invariant),
    #[error("element {id:?} does not exist")]
    Missing { id: ElementId },
    #[error("element {id:?} is not stateful")]
    NotStateful { id: ElementId },
    #[error("state of element {id:?} is not a {expected}")]
    StateTypeMismatch { id: ElementId, expected: &'static str },
    #[error("reconciliation produced no root element")]
    EmptyTree,
}

impl TreeError {
    /// Invariant violations mean the tree can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TreeError::InvariantViolation(_))
    }
}
