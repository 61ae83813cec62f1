use thiserror::Error;

/// Failure handed back by an `EntityLoader` collaborator.
///
/// Carries a human-readable cause and nothing else; retry, backoff and
/// timeout policy belong to the collaborator that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("load failed: {cause}")]
pub struct LoadError {
    pub cause: String,
}

impl LoadError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Defect: a slot was asked to transition after reaching its terminal state.
///
/// This is a programming error on the caller's side, not a recoverable
/// condition. `Slot::resolve` panics with it; `Slot::try_resolve` returns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("slot already holds a terminal state; slots transition at most once")]
pub struct AlreadyResolved;
