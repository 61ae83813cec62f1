//! # Slots, Bindings, and Loaders
//!
//! Vitrine tracks one asynchronously loaded value per `Slot` instead of
//! sprinkling "is it here yet?" flags through view code. There are three
//! main pieces:
//!
//! - `Slot<T>` — lifecycle of one eventual value: `Pending`, then exactly
//!   one of `Ready` or `Failed`.
//! - `EntityLoader<T>` — the collaborator contract: given an id, eventually
//!   hand a `Result` to a one-shot `Completion`.
//! - `LoadBinding<T>` — glue that drives a loader into slots it owns, with
//!   stale results discarded when the bound id changes.
//!
//! ## Slots
//!
//! A slot starts `Pending` and transitions at most once:
//!
//! ```rust
//! use vitrine_core::*;
//!
//! let slot: Slot<String> = Slot::new();
//! assert!(slot.is_pending());
//!
//! slot.resolve(Ok("hello".to_string()));
//! assert_eq!(slot.current(), SlotState::Ready("hello".to_string()));
//! ```
//!
//! Consumers read via `current()` or `subscribe`; only the owning binding
//! resolves. Asking a slot to transition a second time is a programming
//! error and panics (`try_resolve` is the checked form).
//!
//! ## Bindings
//!
//! `LoadBinding::bind` issues a load and hands out the slot to render from.
//! Rebinding supersedes the in-flight request: whatever that request
//! eventually delivers is dropped, never written into the newer slot.
//!
//! ```rust
//! use std::rc::Rc;
//! use vitrine_core::*;
//!
//! let loader: Rc<dyn EntityLoader<String>> = Rc::new(|id: &str, done: Completion<String>| {
//!     let id = id.to_string();
//!     defer(move || done.ok(format!("payload for {id}")));
//! });
//!
//! let binding = LoadBinding::bind(loader, "v1");
//! assert!(binding.slot().is_pending());
//!
//! flush();
//! assert!(binding.slot().is_ready());
//! ```
//!
//! ## Cooperative scheduling
//!
//! Everything runs on one thread. The only suspension point is the gap
//! between `load` and the delivery of its completion; `defer`/`flush` give
//! loaders a place to park completions so they arrive "later", in any
//! relative order, without an async runtime.

pub mod binding;
pub mod defer;
pub mod error;
pub mod loader;
pub mod prelude;
pub mod scope;
pub mod slot;

pub use binding::*;
pub use defer::*;
pub use error::*;
pub use loader::*;
pub use prelude::*;
pub use scope::*;
pub use slot::*;
