//! Window-wide pointer listening, scoped to a gesture.
//!
//! While a [`PointerCapture`] is alive the grid widget consumes pointer moves
//! and releases from anywhere in the window, not just over its container.
//! Dropping the capture detaches those listeners again.

use std::cell::Cell;
use std::rc::Rc;

/// Registry of active pointer captures for one widget.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    active: Rc<Cell<usize>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches window-wide move/release listeners until the guard is dropped.
    pub fn capture(&self) -> PointerCapture {
        self.active.set(self.active.get() + 1);
        PointerCapture {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of captures currently holding listeners.
    pub fn active_captures(&self) -> usize {
        self.active.get()
    }

    /// Returns true while any capture is alive.
    pub fn is_listening(&self) -> bool {
        self.active_captures() > 0
    }
}

/// Guard for window-wide pointer listeners.
#[derive(Debug)]
pub struct PointerCapture {
    active: Rc<Cell<usize>>,
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_released_on_drop() {
        let hub = PointerHub::new();
        assert!(!hub.is_listening());

        let capture = hub.capture();
        assert_eq!(hub.clone().active_captures(), 1);
        drop(capture);
        assert_eq!(hub.active_captures(), 0);
    }
}
