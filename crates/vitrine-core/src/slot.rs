use std::cell::RefCell;

use crate::{AlreadyResolved, LoadError};

pub type SubId = usize;

/// Lifecycle of one asynchronously obtained value.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotState<T> {
    Pending,
    Ready(T),
    Failed(LoadError),
}

impl<T> SlotState<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SlotState::Pending)
    }
}

/// Container tracking one load's lifecycle.
///
/// Created `Pending`; transitions once to `Ready` or `Failed` and never
/// again. Consumers read (`current`, `subscribe`); only the owner that
/// created the slot resolves it.
pub struct Slot<T> {
    state: RefCell<SlotState<T>>,
    subs: RefCell<Vec<Box<dyn Fn(&SlotState<T>)>>>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(SlotState::Pending),
            subs: RefCell::new(Vec::new()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(&*self.state.borrow(), SlotState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(&*self.state.borrow(), SlotState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(&*self.state.borrow(), SlotState::Failed(_))
    }

    /// The failure, if the slot has one.
    pub fn error(&self) -> Option<LoadError> {
        match &*self.state.borrow() {
            SlotState::Failed(e) => Some(e.clone()),
            _ => None,
        }
    }

    /// Moves the slot to its terminal state. At most one call succeeds;
    /// any further call reports `AlreadyResolved`.
    pub fn try_resolve(&self, result: Result<T, LoadError>) -> Result<(), AlreadyResolved> {
        {
            let mut state = self.state.borrow_mut();
            if state.is_terminal() {
                return Err(AlreadyResolved);
            }
            *state = match result {
                Ok(value) => SlotState::Ready(value),
                Err(err) => SlotState::Failed(err),
            };
        }
        let state = self.state.borrow();
        for sub in self.subs.borrow().iter() {
            sub(&state);
        }
        Ok(())
    }

    /// Like `try_resolve`, but a second call is treated as the defect it is.
    pub fn resolve(&self, result: Result<T, LoadError>) {
        if let Err(defect) = self.try_resolve(result) {
            panic!("{defect}");
        }
    }

    /// Push notification on the transition. Subscribers registered after the
    /// terminal state are never called; poll `current` instead.
    pub fn subscribe(&self, f: impl Fn(&SlotState<T>) + 'static) -> SubId {
        self.subs.borrow_mut().push(Box::new(f));
        self.subs.borrow().len() - 1
    }
}

impl<T: Clone> Slot<T> {
    /// Snapshot of the current state.
    pub fn current(&self) -> SlotState<T> {
        self.state.borrow().clone()
    }

    /// The value, if the slot has one.
    pub fn value(&self) -> Option<T> {
        match &*self.state.borrow() {
            SlotState::Ready(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("state", &*self.state.borrow())
            .finish()
    }
}
