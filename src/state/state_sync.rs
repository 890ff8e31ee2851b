//! Snapshot cache kept in step with an external layout store.
//!
//! Stores may return a structurally new state on every read, so the cache is
//! never refreshed by comparing references: every notification and every
//! store swap overwrites it unconditionally.

use crate::layout::LayoutState;
use crate::traits::{same_store, StoreHandle, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Holds the latest snapshot of one store and the subscription feeding it.
///
/// Exactly one subscription is live per store identity. Dropping the
/// `StateSync` unsubscribes.
pub struct StateSync {
    store: StoreHandle,
    cache: Rc<RefCell<LayoutState>>,
    refreshes: Rc<Cell<u64>>,
    subscription: Option<Subscription>,
}

impl StateSync {
    /// Reads the store's current state and subscribes to its changes.
    pub fn new(store: &StoreHandle) -> Self {
        let mut sync = Self {
            store: Rc::clone(store),
            cache: Rc::new(RefCell::new(store.get_state())),
            refreshes: Rc::new(Cell::new(1)),
            subscription: None,
        };
        sync.subscribe();
        sync
    }

    /// Returns the current snapshot for `store`.
    ///
    /// If `store` is a different instance from the one currently tracked, the
    /// old subscription is released, the new store is read synchronously and a
    /// new subscription is taken before returning.
    pub fn sync(&mut self, store: &StoreHandle) -> LayoutState {
        if !same_store(&self.store, store) {
            tracing::debug!("layout store swapped, resynchronizing");
            self.subscription = None;
            self.store = Rc::clone(store);
            self.overwrite(store.get_state());
            self.subscribe();
        }
        self.snapshot()
    }

    /// Returns a copy of the cached snapshot.
    pub fn snapshot(&self) -> LayoutState {
        self.cache.borrow().clone()
    }

    /// The store currently tracked.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// How many times the cache has been written, including the initial read.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.get()
    }

    fn overwrite(&self, state: LayoutState) {
        *self.cache.borrow_mut() = state;
        self.refreshes.set(self.refreshes.get() + 1);
    }

    fn subscribe(&mut self) {
        let store = Rc::downgrade(&self.store);
        let cache = Rc::clone(&self.cache);
        let refreshes = Rc::clone(&self.refreshes);

        self.subscription = Some(self.store.subscribe(Rc::new(move || {
            let Some(store) = store.upgrade() else {
                return;
            };
            *cache.borrow_mut() = store.get_state();
            refreshes.set(refreshes.get() + 1);
        })));
    }
}

impl std::fmt::Debug for StateSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateSync")
            .field("snapshot", &*self.cache.borrow())
            .field("refreshes", &self.refreshes.get())
            .finish_non_exhaustive()
    }
}
