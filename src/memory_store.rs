//! In-memory layout store.
//!
//! A minimal [`LayoutStore`] used by the demo application and by tests. It
//! applies actions verbatim and keeps a log of everything dispatched; it does
//! not resolve collisions or compact the layout.

use crate::layout::{LayoutAction, LayoutState};
use crate::traits::{LayoutStore, Listener, Subscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct StoreInner {
    state: LayoutState,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
    dispatched: Vec<LayoutAction>,
}

/// Layout store backed by a `RefCell`.
///
/// `get_state` clones on every call, so consumers always see a new value.
pub struct MemoryStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl MemoryStore {
    /// Creates a store holding `state`.
    pub fn new(state: LayoutState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state,
                listeners: Vec::new(),
                next_listener_id: 0,
                dispatched: Vec::new(),
            })),
        }
    }

    /// Replaces the whole state and notifies listeners.
    pub fn replace_state(&self, state: LayoutState) {
        self.inner.borrow_mut().state = state;
        self.notify();
    }

    /// Returns every action dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<LayoutAction> {
        self.inner.borrow().dispatched.clone()
    }

    /// Number of actions dispatched so far.
    pub fn dispatch_count(&self) -> usize {
        self.inner.borrow().dispatched.len()
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Listeners read the store, so release the borrow before calling them.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener();
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(LayoutState::default())
    }
}

impl LayoutStore for MemoryStore {
    fn get_state(&self) -> LayoutState {
        self.inner.borrow().state.clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let weak: Weak<RefCell<StoreInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    fn dispatch(&self, action: LayoutAction) {
        {
            let mut inner = self.inner.borrow_mut();
            let applied = apply_action(&mut inner.state, &action);
            if !applied {
                tracing::debug!(id = action.item_id(), "action for unknown panel ignored");
            }
            tracing::trace!(?action, "store dispatch");
            inner.dispatched.push(action);
        }
        self.notify();
    }
}

/// Applies `action` to the matching item. Returns false if no item matched.
fn apply_action(state: &mut LayoutState, action: &LayoutAction) -> bool {
    let Some(item) = state.items.iter_mut().find(|item| item.id == action.item_id()) else {
        return false;
    };

    match *action {
        LayoutAction::Move { x, y, .. } => {
            item.x = x;
            item.y = y;
        }
        LayoutAction::Resize { w, h, .. } => {
            item.w = w;
            item.h = h;
        }
    }
    true
}
