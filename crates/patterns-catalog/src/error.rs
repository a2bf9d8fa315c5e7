//! Errors raised inside pattern demonstrations

use patterns_core::ExampleFailure;

/// Violated precondition inside a demonstration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Factory asked for a kind it cannot build
    #[error("unknown animal kind: {0}")]
    UnknownAnimal(String),

    /// Remote button pressed with no command bound
    #[error("no command bound to slot {0}")]
    EmptySlot(usize),

    /// Remote slot index past the last slot
    #[error("slot {slot} out of range (remote has {slots} slots)")]
    SlotOutOfRange {
        /// Requested slot
        slot: usize,
        /// Number of slots on the remote
        slots: usize,
    },

    /// Child added to a leaf node
    #[error("leaf '{0}' cannot have children")]
    LeafHasNoChildren(String),
}

impl From<PatternError> for ExampleFailure {
    fn from(err: PatternError) -> Self {
        ExampleFailure::new(err.to_string())
    }
}
