use crate::layout::{LayoutAction, LayoutState};
use std::rc::Rc;

/// Callback invoked by a store after each committed change.
pub type Listener = Rc<dyn Fn()>;

/// Shared handle to a layout store. Store identity is the identity of the
/// allocation behind this handle.
pub type StoreHandle = Rc<dyn LayoutStore>;

/// Trait for the external store that owns committed layout state.
///
/// The grid widget only ever reads snapshots and sends actions; applying
/// actions, enforcing occupancy rules and persistence all live behind this
/// seam.
pub trait LayoutStore {
    /// Returns the current state. May be a fresh value on every call.
    fn get_state(&self) -> LayoutState;

    /// Registers a change listener. The listener stays registered until the
    /// returned subscription is dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Requests a change.
    fn dispatch(&self, action: LayoutAction);
}

/// Returns true if both handles point at the same store instance.
pub fn same_store(a: &StoreHandle, b: &StoreHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Unsubscribes a listener when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unsubscribes now. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
