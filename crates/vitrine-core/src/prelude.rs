pub use crate::binding::LoadBinding;
pub use crate::defer::{defer, flush, is_idle};
pub use crate::error::{AlreadyResolved, LoadError};
pub use crate::loader::{Completion, EntityLoader};
pub use crate::scope::{Dispose, Scope, current_scope, on_unmount, scoped_effect};
pub use crate::slot::{Slot, SlotState, SubId};
