use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::{Completion, Dispose, EntityLoader, Slot, scoped_effect};

/// Drives an `EntityLoader` into slots it owns.
///
/// Each bound id gets a fresh `Pending` slot. Rebinding supersedes the
/// in-flight request: its eventual completion is checked against the
/// generation it was issued for and discarded if a newer bind happened in
/// between. The superseded slot is never written again, so a stale result
/// can never overwrite the state that belongs to the newer id.
///
/// Handles are cheap clones sharing one binding; releasing any of them
/// releases all.
pub struct LoadBinding<T: 'static> {
    inner: Rc<BindingInner<T>>,
}

struct BindingInner<T: 'static> {
    loader: RefCell<Option<Rc<dyn EntityLoader<T>>>>,
    slot: RefCell<Rc<Slot<T>>>,
    id: RefCell<String>,
    generation: Cell<u64>,
    released: Cell<bool>,
}

impl<T> LoadBinding<T> {
    /// Creates a `Pending` slot for `id` and issues the load.
    pub fn bind(loader: Rc<dyn EntityLoader<T>>, id: impl Into<String>) -> Self {
        let inner = Rc::new(BindingInner {
            loader: RefCell::new(Some(loader)),
            slot: RefCell::new(Rc::new(Slot::new())),
            id: RefCell::new(id.into()),
            generation: Cell::new(0),
            released: Cell::new(false),
        });
        issue(&inner);
        LoadBinding { inner }
    }

    /// The slot for the currently bound id. After a rebind this is a new
    /// slot; after release it is the last one, frozen where it got to.
    pub fn slot(&self) -> Rc<Slot<T>> {
        self.inner.slot.borrow().clone()
    }

    pub fn bound_id(&self) -> String {
        self.inner.id.borrow().clone()
    }

    pub fn is_released(&self) -> bool {
        self.inner.released.get()
    }

    /// Atomically supersedes the in-flight request and starts loading
    /// `new_id` into a fresh slot. The old request's completion becomes a
    /// no-op even if it fires afterwards.
    pub fn rebind(&self, new_id: impl Into<String>) {
        if self.inner.released.get() {
            log::warn!("rebind on a released binding; ignored");
            return;
        }
        self.inner.generation.set(self.inner.generation.get() + 1);
        *self.inner.id.borrow_mut() = new_id.into();
        *self.inner.slot.borrow_mut() = Rc::new(Slot::new());
        issue(&self.inner);
    }

    /// Idempotent. Suppresses any still-in-flight completion and drops the
    /// loader reference.
    pub fn release(&self) {
        if self.inner.released.replace(true) {
            return;
        }
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.loader.borrow_mut().take();
    }

    /// Ties `release` to the current `Scope`, so tearing the owning scope
    /// down suppresses whatever is still in flight.
    pub fn release_on_dispose(&self) {
        let handle = self.clone();
        scoped_effect(move || Dispose::new(move || handle.release()));
    }
}

impl<T> Clone for LoadBinding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> std::fmt::Debug for LoadBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadBinding")
            .field("id", &*self.inner.id.borrow())
            .field("generation", &self.inner.generation.get())
            .field("released", &self.inner.released.get())
            .finish()
    }
}

fn issue<T>(inner: &Rc<BindingInner<T>>) {
    let generation = inner.generation.get();
    let slot = inner.slot.borrow().clone();
    let id = inner.id.borrow().clone();
    let weak: Weak<BindingInner<T>> = Rc::downgrade(inner);

    let done = Completion::new(move |result| {
        let Some(owner) = weak.upgrade() else {
            log::debug!("discarding completion for '{id}': binding dropped");
            return;
        };
        if owner.released.get() || owner.generation.get() != generation {
            log::debug!("discarding stale completion for '{id}'");
            return;
        }
        // The generation check makes this the single resolve this slot
        // will ever see; the one-shot token rules out a duplicate from
        // the same request.
        slot.resolve(result);
    });

    // No borrows held across `load`; a loader is allowed to complete
    // synchronously, and the completion touches this binding.
    let loader = inner.loader.borrow().clone();
    let bound = inner.id.borrow().clone();
    match loader {
        Some(loader) => loader.load(&bound, done),
        None => log::warn!("load issued on a released binding; ignored"),
    }
}
